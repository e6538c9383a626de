//! Paragraph and plain (spec.md §4.D). A paragraph's lookahead resolves
//! spec.md's Open Question in favor of historical Pandoc behavior: `para`
//! stops before `blockQuote`/`header` in strict mode but not before
//! `hrule` (see `blocks::header::setext_header`, which absorbs a trailing
//! `---` as a setext underline instead).

use super::blockquote::emacs_box_blockquote;
use super::header::atx_header;
use super::hrule::is_hrule_line;
use super::list::starts_list_marker;
use super::util::{is_blank, take_line};
use crate::state::{ParserContext, ParserState};

fn would_stop(line: &str, state: &ParserState) -> bool {
    if state.options.strict {
        line.trim_start().starts_with('>') || atx_header(line).is_some()
    } else {
        emacs_box_blockquote(line).is_some()
    }
}

/// Consumes consecutive non-blank lines into one text block. Returns
/// `(text, rest, terminated)`: `terminated` is true when the run stopped
/// because of a blank line or a lookahead condition (i.e. a real block
/// boundary was found), false when it simply ran out of input.
fn consume_lines<'a>(input: &'a str, state: &ParserState) -> (String, &'a str, bool) {
    let mut text = String::new();
    let mut cursor = input;
    let mut first = true;
    let mut terminated = false;
    loop {
        if cursor.is_empty() {
            break;
        }
        let (line, rest) = take_line(cursor);
        if is_blank(line) {
            terminated = true;
            break;
        }
        if !first {
            if would_stop(line, state) {
                terminated = true;
                break;
            }
            if state.parser_context == ParserContext::ListItemState
                && (starts_list_marker(line, state.options.strict) || is_hrule_line(line))
            {
                terminated = true;
                break;
            }
        }
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line);
        cursor = rest;
        first = false;
    }
    (text, cursor, terminated)
}

/// One or more inlines terminated by a blank line or a lookahead block
/// boundary (spec.md §4.D). Falls through (returns `None`) when the text
/// run instead simply reaches EOF — that case is `plain`'s job.
pub fn paragraph<'a>(input: &'a str, state: &ParserState) -> Option<(String, &'a str)> {
    let (text, rest, terminated) = consume_lines(input, state);
    if text.is_empty() || !terminated {
        return None;
    }
    Some((text, rest))
}

/// Like `paragraph` but also accepts a run that reaches EOF without a
/// blank line — used for list-item/quote bodies that don't end in one.
pub fn plain<'a>(input: &'a str, state: &ParserState) -> Option<(String, &'a str)> {
    let (text, rest, _terminated) = consume_lines(input, state);
    if text.is_empty() {
        None
    } else {
        Some((text, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    #[test]
    fn paragraph_stops_at_blank_line() {
        let state = ParserState::new(ReaderOptions::default());
        let (text, rest) = paragraph("line one\nline two\n\nnext\n", &state).unwrap();
        assert_eq!(text, "line one\nline two");
        assert_eq!(rest, "\nnext\n");
    }

    #[test]
    fn paragraph_defers_to_plain_at_eof() {
        let state = ParserState::new(ReaderOptions::default());
        assert!(paragraph("a\nb", &state).is_none());
    }

    #[test]
    fn plain_reaches_eof() {
        let state = ParserState::new(ReaderOptions::default());
        let (text, rest) = plain("a\nb", &state).unwrap();
        assert_eq!(text, "a\nb");
        assert_eq!(rest, "");
    }
}
