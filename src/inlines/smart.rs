//! Smart typography (spec.md §4.E "Smart typography"), engaged only when
//! `S.smart`: curly quotes with nesting prevention via `QuoteContext`,
//! em/en dashes, ellipses, bare apostrophes.

use crate::ast::{Inline, QuoteType};
use crate::state::{ParserState, QuoteContext};

const QUOTE_OPEN_FORBIDDEN: &str = ")!],.;:-? \t\n";
const CONTRACTION_SUFFIXES: &[&str] = &["s", "t", "m", "ve", "ll", "re"];

pub fn em_dash<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    if !state.options.smart {
        return None;
    }
    let rest = input.strip_prefix("---")?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    Some((Inline::EmDash, rest))
}

pub fn en_dash<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    if !state.options.smart {
        return None;
    }
    if let Some(rest) = input.strip_prefix("--") {
        if !rest.starts_with('-') {
            return Some((Inline::EnDash, rest));
        }
        return None;
    }
    let rest = input.strip_prefix('-')?;
    let next = rest.chars().next()?;
    if next.is_ascii_digit() {
        Some((Inline::EnDash, rest))
    } else {
        None
    }
}

pub fn ellipses<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    if !state.options.smart {
        return None;
    }
    for pattern in ["...", " . . . ", ". . .", " . . ."] {
        if let Some(rest) = input.strip_prefix(pattern) {
            return Some((Inline::Ellipses, rest));
        }
    }
    None
}

pub fn double_quote<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    if !state.options.smart || state.quote_context == QuoteContext::InDouble {
        return None;
    }
    let body = input.strip_prefix('"')?;
    let close_at = body.find('"')?;
    if close_at == 0 {
        return None;
    }
    let inner = &body[..close_at];
    let snapshot = state.quote_context;
    state.quote_context = QuoteContext::InDouble;
    let inlines = crate::inlines::parse_inlines(inner, state);
    state.quote_context = snapshot;
    Some((
        Inline::Quoted(QuoteType::DoubleQuote, inlines),
        &body[close_at + 1..],
    ))
}

pub fn single_quote<'a>(input: &'a str, state: &mut ParserState) -> Option<(Inline, &'a str)> {
    if !state.options.smart || state.quote_context == QuoteContext::InSingle {
        return None;
    }
    let body = input.strip_prefix('\'')?;
    let first = body.chars().next()?;
    if QUOTE_OPEN_FORBIDDEN.contains(first) {
        return None;
    }
    for suffix in CONTRACTION_SUFFIXES {
        if let Some(after) = body.strip_prefix(suffix) {
            let boundary = after.chars().next().map(|c| !c.is_alphanumeric()).unwrap_or(true);
            if boundary {
                return None;
            }
        }
    }
    let close_at = body.find('\'')?;
    if close_at == 0 {
        return None;
    }
    let inner = &body[..close_at];
    let snapshot = state.quote_context;
    state.quote_context = QuoteContext::InSingle;
    let inlines = crate::inlines::parse_inlines(inner, state);
    state.quote_context = snapshot;
    Some((
        Inline::Quoted(QuoteType::SingleQuote, inlines),
        &body[close_at + 1..],
    ))
}

/// A stray `'`/U+2019 that `single_quote` already rejected as an opener
/// (e.g. the one in "don't") is a plain apostrophe.
pub fn apostrophe<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    if !state.options.smart {
        return None;
    }
    if let Some(rest) = input.strip_prefix('\'') {
        return Some((Inline::Apostrophe, rest));
    }
    let rest = input.strip_prefix('\u{2019}')?;
    Some((Inline::Apostrophe, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    #[test]
    fn em_dash_eats_trailing_space() {
        let state = ParserState::new(ReaderOptions::default());
        let (inline, rest) = em_dash("--- next", &state).unwrap();
        assert_eq!(inline, Inline::EmDash);
        assert_eq!(rest, "next");
    }

    #[test]
    fn en_dash_numeric_range() {
        let state = ParserState::new(ReaderOptions::default());
        let (inline, rest) = en_dash("-20", &state).unwrap();
        assert_eq!(inline, Inline::EnDash);
        assert_eq!(rest, "20");
    }

    #[test]
    fn single_quote_rejects_contraction() {
        let mut state = ParserState::new(ReaderOptions::default());
        assert!(single_quote("'t do it'", &mut state).is_none());
    }
}
