//! Links, images, footnote references/inline footnotes, autolinks
//! (spec.md §4.E "Links", "Autolinks", "Images"). Reference lookup misses
//! backtrack to literal bracketed text with its inner inlines intact.

use std::sync::OnceLock;

use regex::Regex;

use crate::ast::{Block, Inline};
use crate::state::ParserState;

fn autolink_scheme_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:https?|ftp|mailto):\S+$").unwrap())
}

/// `[...]` with balanced interior brackets (spec.md's `inlinesInBalanced`).
fn balanced_label(input: &str) -> Option<(&str, &str)> {
    if !input.starts_with('[') {
        return None;
    }
    let mut depth = 0i32;
    for (i, c) in input.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&input[1..i], &input[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_title(input: &str) -> Option<(String, &str)> {
    let quote = input.chars().next()?;
    let closing = match quote {
        '"' => '"',
        '\'' => '\'',
        '(' => ')',
        _ => return None,
    };
    let body = &input[quote.len_utf8()..];
    let end = body.find(closing)?;
    Some((body[..end].to_string(), &body[end + closing.len_utf8()..]))
}

/// `(url "title")` or `(<url> 'title')` or `(url)`, already past the `(`.
fn parse_inline_dest(input: &str) -> Option<(String, String, &str)> {
    let (url, after_url) = if let Some(bracketed) = input.strip_prefix('<') {
        let end = bracketed.find('>')?;
        (bracketed[..end].to_string(), &bracketed[end + 1..])
    } else {
        let end = input
            .find(|c: char| c == ' ' || c == '\t' || c == ')')
            .unwrap_or(input.len());
        (input[..end].to_string(), &input[end..])
    };
    let after_url = after_url.trim_start();
    if let Some(rest) = after_url.strip_prefix(')') {
        return Some((url, String::new(), rest));
    }
    let (title, rest) = parse_title(after_url)?;
    let rest = rest.trim_start().strip_prefix(')')?;
    Some((url, title, rest))
}

fn link_or_image<'a>(
    input: &'a str,
    state: &mut ParserState,
    is_image: bool,
) -> Option<(Inline, &'a str)> {
    let (label_text, after_label) = balanced_label(input)?;
    let label_inlines = crate::inlines::parse_inlines(label_text, state);

    let build = |label: Vec<Inline>, dest: (String, String)| {
        if is_image {
            Inline::Image(label, dest)
        } else {
            Inline::Link(label, dest)
        }
    };

    if let Some(rest) = after_label.strip_prefix('(') {
        let (url, title, rest2) = parse_inline_dest(rest)?;
        return Some((build(label_inlines, (url, title)), rest2));
    }

    if let Some(rest) = after_label.strip_prefix('[') {
        let close = rest.find(']')?;
        let ref_text = &rest[..close];
        let rest2 = &rest[close + 1..];
        let key_inlines = if ref_text.is_empty() {
            label_inlines.clone()
        } else {
            crate::inlines::parse_inlines(ref_text, state)
        };
        let dest = state.lookup_key(&key_inlines)?;
        return Some((build(label_inlines, dest), rest2));
    }

    let dest = state.lookup_key(&label_inlines)?;
    Some((build(label_inlines, dest), after_label))
}

pub fn link<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    link_or_image(input, state, false)
}

pub fn image<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    let rest = input.strip_prefix('!')?;
    link_or_image(rest, state, true)
}

/// `[^id]`, resolved against the note table built during preprocessing.
pub fn footnote_ref<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    let rest = input.strip_prefix("[^")?;
    let end = rest.find(']')?;
    let id = &rest[..end];
    let body = state.notes.get(id)?.clone();
    Some((Inline::Note(body), &rest[end + 1..]))
}

/// `^[...]`, an inline footnote body parsed as a single paragraph.
pub fn inline_footnote<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    let rest = input.strip_prefix("^[")?;
    let mut depth = 1i32;
    let mut end = None;
    for (i, c) in rest.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    end = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }
    let end = end?;
    let inlines = crate::inlines::parse_inlines(&rest[..end], state);
    Some((Inline::Note(vec![Block::Para(inlines)]), &rest[end + 1..]))
}

/// `<scheme:rest>` or `<local@dom.ain>` (spec.md §4.E "Autolinks").
pub fn autolink<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    let rest = input.strip_prefix('<')?;
    let end = rest.find('>')?;
    let inner = &rest[..end];
    let after = &rest[end + 1..];

    if autolink_scheme_re().is_match(inner) {
        return Some((
            Inline::Link(vec![Inline::Str(inner.to_string())], (inner.to_string(), String::new())),
            after,
        ));
    }

    let at = inner.find('@')?;
    if at == 0 || at + 1 >= inner.len() {
        return None;
    }
    let (local, domain) = (&inner[..at], &inner[at + 1..]);
    if local.contains(char::is_whitespace) || domain.contains(char::is_whitespace) || !domain.contains('.') {
        return None;
    }
    let url = format!("mailto:{inner}");
    let visible = if state.options.strict {
        Inline::Str(inner.to_string())
    } else {
        Inline::Code(inner.to_string())
    };
    Some((Inline::Link(vec![visible], (url, String::new())), after))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    #[test]
    fn inline_link_with_title() {
        let mut state = ParserState::new(ReaderOptions::default());
        let (inline, rest) = link("[a](http://x \"t\")z", &mut state).unwrap();
        assert_eq!(
            inline,
            Inline::Link(vec![Inline::Str("a".to_string())], ("http://x".to_string(), "t".to_string()))
        );
        assert_eq!(rest, "z");
    }

    #[test]
    fn reference_link_resolves_from_key_table() {
        let mut state = ParserState::new(ReaderOptions::default());
        state
            .keys
            .insert("a".to_string(), ("http://x".to_string(), "t".to_string()));
        let (inline, _) = link("[a]", &mut state).unwrap();
        assert_eq!(
            inline,
            Inline::Link(vec![Inline::Str("a".to_string())], ("http://x".to_string(), "t".to_string()))
        );
    }

    #[test]
    fn reference_link_miss_backtracks() {
        let mut state = ParserState::new(ReaderOptions::default());
        assert!(link("[nope]", &mut state).is_none());
    }

    #[test]
    fn email_autolink_is_code_visible() {
        let state = ParserState::new(ReaderOptions::default());
        let (inline, rest) = autolink("<a@b.com>x", &state).unwrap();
        assert_eq!(
            inline,
            Inline::Link(vec![Inline::Code("a@b.com".to_string())], ("mailto:a@b.com".to_string(), String::new()))
        );
        assert_eq!(rest, "x");
    }
}
