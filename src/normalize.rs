//! Shared helpers referenced directly by spec.md §6: `normalizeSpaces`,
//! `compactify`, plus label normalization for the key table.

use unicode_normalization::UnicodeNormalization;

use crate::ast::{Block, Inline};

/// Collapse `[Inline]` so there is no leading/trailing `Space` and no two
/// adjacent `Space`s. Idempotent (spec.md §8 invariant 2).
pub fn normalize_spaces(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::with_capacity(inlines.len());
    for inline in inlines {
        let is_space = matches!(inline, Inline::Space);
        if is_space {
            if out.is_empty() || matches!(out.last(), Some(Inline::Space)) {
                continue;
            }
        }
        out.push(inline);
    }
    if matches!(out.last(), Some(Inline::Space)) {
        out.pop();
    }
    out
}

/// Render an inline run down to plain text, used only for label matching
/// (never for the document tree itself — that keeps the original inlines).
fn plain_text(inlines: &[Inline]) -> String {
    let mut s = String::new();
    for inline in inlines {
        match inline {
            Inline::Str(t) => s.push_str(t),
            Inline::Space => s.push(' '),
            Inline::Emph(xs)
            | Inline::Strong(xs)
            | Inline::Strikeout(xs)
            | Inline::Superscript(xs)
            | Inline::Subscript(xs)
            | Inline::Quoted(_, xs)
            | Inline::Link(xs, _)
            | Inline::Image(xs, _) => s.push_str(&plain_text(xs)),
            Inline::Code(t) | Inline::Math(t) | Inline::TeX(t) | Inline::HtmlInline(t) => {
                s.push_str(t)
            }
            Inline::EmDash => s.push('\u{2014}'),
            Inline::EnDash => s.push('\u{2013}'),
            Inline::Ellipses => s.push('\u{2026}'),
            Inline::Apostrophe => s.push('\''),
            Inline::LineBreak => s.push(' '),
            Inline::Note(_) => {}
        }
    }
    s
}

/// Label key used for the reference table: whitespace-normalized,
/// Unicode-NFC-normalized, lowercased. Spec.md §3: "Equality is structural
/// on normalized inlines"; §4.B's preprocessing makes keys case-insensitive
/// after whitespace normalization.
pub fn normalize_label(inlines: &[Inline]) -> String {
    let text = plain_text(inlines);
    let collapsed: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.nfc().collect::<String>().to_lowercase()
}

/// Loosen/tighten a list's items in place (spec.md §3 invariant /
/// §8 invariant 5): if every non-final item ends in `Para` and is itself
/// single-`Para`, and the final item's last block is also a `Para`, the
/// whole list is compact — convert that final trailing `Para` to `Plain`
/// so a purely compact list renders tight end-to-end. Block count and
/// relative order within each item are preserved.
pub fn compactify(mut items: Vec<Vec<Block>>) -> Vec<Vec<Block>> {
    if items.is_empty() {
        return items;
    }
    let all_para_ended = items.iter().all(|item| matches!(item.last(), Some(Block::Para(_))));
    if !all_para_ended {
        return items;
    }
    if let Some(last_item) = items.last_mut() {
        if let Some(Block::Para(inlines)) = last_item.last_mut() {
            let taken = std::mem::take(inlines);
            *last_item.last_mut().unwrap() = Block::Plain(taken);
        }
    }
    items
}
