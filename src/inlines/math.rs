//! Inline math (spec.md §4.E "Math"): `$...$`, opener not followed by a
//! space, body is space-separated "math words" each possibly containing
//! `\$` escapes, disabled entirely in strict mode.

use crate::ast::Inline;
use crate::state::ParserState;

pub fn math<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    if state.options.strict {
        return None;
    }
    let body = input.strip_prefix('$')?;
    if body.starts_with(' ') || body.starts_with('\t') || body.is_empty() {
        return None;
    }
    let mut idx = 0usize;
    let bytes = body.as_bytes();
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' if idx + 1 < bytes.len() => idx += 2,
            b'$' => {
                let raw = &body[..idx];
                let unescaped = raw.replace("\\$", "$");
                return Some((Inline::Math(unescaped), &body[idx + 1..]));
            }
            _ => idx += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    #[test]
    fn simple_math_span() {
        let state = ParserState::new(ReaderOptions::default());
        let (inline, rest) = math("$x^2$ done", &state).unwrap();
        assert_eq!(inline, Inline::Math("x^2".to_string()));
        assert_eq!(rest, " done");
    }

    #[test]
    fn opener_followed_by_space_rejected() {
        let state = ParserState::new(ReaderOptions::default());
        assert!(math("$ x$", &state).is_none());
    }

    #[test]
    fn disabled_in_strict_mode() {
        let mut opts = crate::config::ReaderOptions::default();
        opts.strict = true;
        let state = ParserState::new(opts);
        assert!(math("$x$", &state).is_none());
    }
}
