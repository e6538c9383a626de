//! Escaped characters (spec.md §4.E "Escaped char"). In strict mode only
//! the classic Perl-Markdown escape set is honored; otherwise any
//! non-alphanumeric. Only claims genuinely escapable (punctuation)
//! characters: a backslash followed by a letter is left for `raw LaTeX`
//! to claim first (spec.md §2 row E orders `raw LaTeX` before
//! `escaped char`, since both start with `\`); a backslash nothing else
//! claims falls through to the dispatch loop's literal-char fallback,
//! which is how "unknown escape yields the literal backslash" surfaces.

use crate::ast::Inline;
use crate::state::ParserState;

const STRICT_ESCAPABLE: &str = "\\`*_{}[]()#+-.!>";

pub fn escaped_char<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    let rest = input.strip_prefix('\\')?;
    let c = rest.chars().next()?;
    let escapable = if state.options.strict {
        STRICT_ESCAPABLE.contains(c)
    } else {
        !c.is_alphanumeric()
    };
    if !escapable {
        return None;
    }
    Some((Inline::Str(c.to_string()), &rest[c.len_utf8()..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    #[test]
    fn escapes_punctuation() {
        let state = ParserState::new(ReaderOptions::default());
        let (inline, rest) = escaped_char("\\*text", &state).unwrap();
        assert_eq!(inline, Inline::Str("*".to_string()));
        assert_eq!(rest, "text");
    }

    #[test]
    fn alphanumeric_escape_is_left_for_raw_latex() {
        let state = ParserState::new(ReaderOptions::default());
        assert!(escaped_char("\\alpha", &state).is_none());
    }

    #[test]
    fn strict_mode_only_honors_perl_markdown_set() {
        let mut opts = ReaderOptions::default();
        opts.strict = true;
        let state = ParserState::new(opts);
        assert!(escaped_char("\\~text", &state).is_none());
        let (inline, rest) = escaped_char("\\*text", &state).unwrap();
        assert_eq!(inline, Inline::Str("*".to_string()));
        assert_eq!(rest, "text");
    }
}
