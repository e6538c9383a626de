//! Inline parser (spec.md §4.E): choice among text run, smart punctuation,
//! breaks, code spans, emphasis family, links/images/notes, math,
//! autolinks, raw HTML/LaTeX, escapes, and a literal-char fallback.
//! `normalize_spaces` (spec.md §8 invariant 2) is applied once per call so
//! every `[Inline]` handed back to a block production already satisfies it.
//!
//! Escapes are tried after raw LaTeX (spec.md §2 row E's order), so a
//! backslash followed by a letter — `\textbf{bold}`, `\alpha` — is offered
//! to `raw_latex_inline` first rather than being swallowed as an
//! unescapable backslash.

mod code_span;
mod emphasis;
mod escape;
mod link;
mod math;
mod smart;
mod text;

use crate::ast::Inline;
use crate::normalize::normalize_spaces;
use crate::raw;
use crate::state::ParserState;

fn raw_html_inline<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    if !state.options.parse_raw {
        return None;
    }
    let (tag, rest) = raw::any_html_inline_tag(input)?;
    Some((Inline::HtmlInline(tag.to_string()), rest))
}

fn raw_latex_inline<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    if !state.options.parse_raw || state.options.strict {
        return None;
    }
    let (tex, rest) = raw::raw_latex_inline(input)?;
    Some((Inline::TeX(tex.to_string()), rest))
}

/// Parses `input` to EOF into a normalized inline sequence. Called both at
/// top level (by `blocks::para`/`plain`/headers) and recursively for the
/// interior of emphasis, links, quotes and footnotes.
pub fn parse_inlines(input: &str, state: &mut ParserState) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut cursor = input;
    while !cursor.is_empty() {
        if let Some((inline, rest)) = code_span::code_span(cursor) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = link::footnote_ref(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = link::inline_footnote(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = link::image(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = link::link(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = math::math(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = emphasis::strong(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = emphasis::strikeout(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = emphasis::emph(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = emphasis::superscript(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = emphasis::subscript(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = link::autolink(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = raw_html_inline(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = raw_latex_inline(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = escape::escaped_char(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = smart::em_dash(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = smart::en_dash(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = smart::ellipses(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = smart::double_quote(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = smart::single_quote(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = smart::apostrophe(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = text::whitespace_or_endline(cursor) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        if let Some((inline, rest)) = text::text_run(cursor, state) {
            out.push(inline);
            cursor = rest;
            continue;
        }
        let (inline, rest) = text::literal_char(cursor).expect("non-empty cursor always yields a char");
        out.push(inline);
        cursor = rest;
    }
    normalize_spaces(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    #[test]
    fn emphasis_and_strong_scenario() {
        let mut state = ParserState::new(ReaderOptions::default());
        let out = parse_inlines("*em* and **strong**", &mut state);
        assert_eq!(
            out,
            vec![
                Inline::Emph(vec![Inline::Str("em".to_string())]),
                Inline::Space,
                Inline::Str("and".to_string()),
                Inline::Space,
                Inline::Strong(vec![Inline::Str("strong".to_string())]),
            ]
        );
    }

    #[test]
    fn plain_text_run() {
        let mut state = ParserState::new(ReaderOptions::default());
        let out = parse_inlines("hello world", &mut state);
        assert_eq!(
            out,
            vec![
                Inline::Str("hello".to_string()),
                Inline::Space,
                Inline::Str("world".to_string()),
            ]
        );
    }

    #[test]
    fn raw_latex_wins_over_escape_for_backslash_letter() {
        let mut state = ParserState::new(ReaderOptions::default());
        let out = parse_inlines("\\textbf{bold}", &mut state);
        assert_eq!(out, vec![Inline::TeX("\\textbf{bold}".to_string())]);
    }

    #[test]
    fn escape_still_claims_punctuation_after_reorder() {
        let mut state = ParserState::new(ReaderOptions::default());
        let out = parse_inlines("\\*not emphasis\\*", &mut state);
        assert_eq!(out[0], Inline::Str("*".to_string()));
    }

    #[test]
    fn reference_link_end_to_end() {
        let mut state = ParserState::new(ReaderOptions::default());
        state
            .keys
            .insert("a".to_string(), ("http://x".to_string(), "t".to_string()));
        let out = parse_inlines("[a]", &mut state);
        assert_eq!(
            out,
            vec![Inline::Link(
                vec![Inline::Str("a".to_string())],
                ("http://x".to_string(), "t".to_string())
            )]
        );
    }
}
