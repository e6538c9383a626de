//! Delimiter-balanced inlines (spec.md §4.E "Delimiter balancing"): strong,
//! emph, strikeout, super/subscript, all built on one `enclosed` helper.
//! Strong is tried before emph so `**` is consumed as a pair before a
//! single `*` can match.

use crate::ast::Inline;
use crate::state::ParserState;

/// `opener`, then a non-empty, non-whitespace-bounded body up to the first
/// `closer` not preceded by whitespace.
fn enclosed<'a>(input: &'a str, opener: &str, closer: &str) -> Option<(&'a str, &'a str)> {
    let body = input.strip_prefix(opener)?;
    if body.is_empty() || body.starts_with(char::is_whitespace) {
        return None;
    }
    let mut search_from = 0usize;
    loop {
        let rel = body[search_from..].find(closer)?;
        let at = search_from + rel;
        if at == 0 {
            return None;
        }
        let before = body[..at].chars().last().unwrap();
        if before.is_whitespace() {
            search_from = at + closer.len();
            continue;
        }
        return Some((&body[..at], &body[at + closer.len()..]));
    }
}

fn wrap<'a>(
    input: &'a str,
    state: &mut ParserState,
    opener: &str,
    closer: &str,
    build: fn(Vec<Inline>) -> Inline,
) -> Option<(Inline, &'a str)> {
    let (inner, rest) = enclosed(input, opener, closer)?;
    let inlines = crate::inlines::parse_inlines(inner, state);
    Some((build(inlines), rest))
}

pub fn strong<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    wrap(input, state, "**", "**", Inline::Strong)
        .or_else(|| wrap(input, state, "__", "__", Inline::Strong))
}

pub fn emph<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    wrap(input, state, "*", "*", Inline::Emph).or_else(|| wrap(input, state, "_", "_", Inline::Emph))
}

pub fn strikeout<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    wrap(input, state, "~~", "~~", Inline::Strikeout)
}

pub fn superscript<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    wrap(input, state, "^", "^", Inline::Superscript)
}

pub fn subscript<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    wrap(input, state, "~", "~", Inline::Subscript)
}
