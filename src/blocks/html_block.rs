//! HTML block (spec.md §4.D): delegates tag recognition to the `raw`
//! collaborator module. In strict mode only recognized block-tag elements
//! are accepted; otherwise any `<...>`-opening run up to a blank line is
//! taken as a raw block.

use crate::raw;
use crate::state::ParserState;

pub fn html_block<'a>(input: &'a str, state: &ParserState) -> Option<(String, &'a str)> {
    let (raw_text, rest) = raw::raw_html_block(input)?;
    if state.options.strict {
        let first_line = raw_text.lines().next().unwrap_or("");
        if !first_line.trim_start().starts_with("<!--") && !raw::any_html_block_tag(first_line.trim_start()) {
            return None;
        }
    }
    let trimmed = raw_text.strip_suffix('\n').unwrap_or(raw_text);
    Some((trimmed.to_string(), rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    #[test]
    fn recognizes_block_tag_up_to_blank_line() {
        let state = ParserState::new(ReaderOptions::default());
        let (text, rest) = html_block("<div>\nhello\n</div>\n\nafter\n", &state).unwrap();
        assert_eq!(text, "<div>\nhello\n</div>");
        assert_eq!(rest, "\nafter\n");
    }

    #[test]
    fn strict_mode_rejects_non_block_tag() {
        let mut opts = ReaderOptions::default();
        opts.strict = true;
        let state = ParserState::new(opts);
        assert!(html_block("<span>text</span>\n\n", &state).is_none());
    }

    #[test]
    fn strict_mode_accepts_comment() {
        let mut opts = ReaderOptions::default();
        opts.strict = true;
        let state = ParserState::new(opts);
        assert!(html_block("<!-- note -->\n\n", &state).is_some());
    }

    #[test]
    fn non_html_paragraph_is_rejected() {
        let state = ParserState::new(ReaderOptions::default());
        assert!(html_block("not html\n\n", &state).is_none());
    }
}
