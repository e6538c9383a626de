//! Plain text runs, whitespace/endline, entity decoding, literal fallback
//! (spec.md §4.E: "text run", "whitespace", "hard/soft break", "entity",
//! "literal `<`").

use crate::ast::Inline;
use crate::raw::decode_character_references;
use crate::state::ParserState;

/// Characters that always end a text run because some other inline
/// production claims them.
fn is_break_char(c: char, smart: bool) -> bool {
    match c {
        '\\' | '`' | '*' | '_' | '~' | '^' | '[' | ']' | '!' | '$' | '<' | '\n' | ' ' | '\t' => {
            true
        }
        '-' | '.' | '\'' | '"' if smart => true,
        _ => false,
    }
}

/// A maximal run of characters with no special meaning, entity-decoded.
pub fn text_run<'a>(input: &'a str, state: &ParserState) -> Option<(Inline, &'a str)> {
    let smart = state.options.smart;
    let end = input
        .char_indices()
        .find(|&(_, c)| is_break_char(c, smart))
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let decoded = decode_character_references(&input[..end]);
    Some((Inline::Str(decoded), &input[end..]))
}

/// A run of spaces/tabs, or a bare newline: two-or-more trailing spaces
/// immediately before `\n` is a hard break; otherwise a soft break/space.
pub fn whitespace_or_endline(input: &str) -> Option<(Inline, &str)> {
    let mut chars = input.char_indices().peekable();
    match chars.peek() {
        Some((_, '\n')) => return Some((Inline::Space, &input[1..])),
        Some((_, ' ')) | Some((_, '\t')) => {}
        _ => return None,
    }
    let run_end = input
        .char_indices()
        .find(|&(_, c)| c != ' ' && c != '\t')
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    let space_count = input[..run_end].chars().filter(|&c| c == ' ').count();
    if space_count >= 2 && input[run_end..].starts_with('\n') {
        return Some((Inline::LineBreak, &input[run_end + 1..]));
    }
    Some((Inline::Space, &input[run_end..]))
}

/// Fallback for characters no other production claims (e.g. a lone `<`
/// that failed every HTML/autolink/raw-LaTeX attempt): one literal char.
pub fn literal_char(input: &str) -> Option<(Inline, &str)> {
    let c = input.chars().next()?;
    let len = c.len_utf8();
    Some((Inline::Str(c.to_string()), &input[len..]))
}
