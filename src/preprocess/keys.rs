//! Pass 1 (spec.md §4.B): `referenceKey` — `0..tab_stop-1` leading spaces,
//! `[label]:`, whitespace, optional `<url>`, optional title (possibly
//! folded onto the next line), then blank line(s).

use crate::ast::Inline;
use crate::blocks::util::{is_blank, take_line};
use crate::normalize::normalize_label;
use crate::state::ParserState;

use super::take_line_clump;

fn parse_title_str(s: &str) -> Option<String> {
    let quote = s.chars().next()?;
    let closing = match quote {
        '"' => '"',
        '\'' => '\'',
        '(' => ')',
        _ => return None,
    };
    let body = &s[quote.len_utf8()..];
    let end = body.rfind(closing)?;
    Some(body[..end].to_string())
}

/// Returns `(label, (url, title), blank_lines_consumed, rest)`.
/// `blank_lines_consumed` lets the caller re-insert that many empty lines
/// into the residual in place of the definition it removed, so line
/// structure is preserved (spec.md §3: "empty lines remain where clumps
/// ended").
fn reference_key(input: &str, tab_stop: usize) -> Option<(String, (String, String), usize, &str)> {
    let (line, after_first) = take_line(input);
    let leading = line.len() - line.trim_start_matches(' ').len();
    if leading >= tab_stop {
        return None;
    }
    let body = line[leading..].strip_prefix('[')?;
    let close = body.find(']')?;
    let label = body[..close].to_string();
    let body = body[close + 1..].strip_prefix(':')?;
    let body = body.trim_start();

    let (url, after_url) = if let Some(bracketed) = body.strip_prefix('<') {
        let end = bracketed.find('>')?;
        (bracketed[..end].to_string(), bracketed[end + 1..].trim_start())
    } else {
        let end = body.find(char::is_whitespace).unwrap_or(body.len());
        (body[..end].to_string(), body[end..].trim_start())
    };
    if url.is_empty() {
        return None;
    }

    let (title, cursor) = if after_url.is_empty() {
        let (next_line, after_next) = take_line(after_first);
        let trimmed_next = next_line.trim();
        if trimmed_next.is_empty() {
            (String::new(), after_first)
        } else {
            match parse_title_str(trimmed_next) {
                Some(t) => (t, after_next),
                None => (String::new(), after_first),
            }
        }
    } else {
        match parse_title_str(after_url) {
            Some(t) => (t, after_first),
            None => return None,
        }
    };

    let (blank_line, after_blank) = take_line(cursor);
    if !is_blank(blank_line) {
        return None;
    }
    let mut blank_lines = 1usize;
    let mut after_blank = after_blank;
    loop {
        if after_blank.is_empty() {
            break;
        }
        let (l, r) = take_line(after_blank);
        if is_blank(l) {
            blank_lines += 1;
            after_blank = r;
        } else {
            break;
        }
    }
    Some((label, (url, title), blank_lines, after_blank))
}

pub fn extract_keys(input: &str, state: &mut ParserState) -> String {
    let mut residual = String::new();
    let mut cursor = input;
    while !cursor.is_empty() {
        if let Some((label, dest, blank_lines, rest)) = reference_key(cursor, state.options.tab_stop) {
            let key = normalize_label(&[Inline::Str(label)]);
            state.keys.insert(key, dest);
            for _ in 0..blank_lines {
                residual.push('\n');
            }
            cursor = rest;
            continue;
        }
        let (clump, rest) = take_line_clump(cursor);
        residual.push_str(clump);
        cursor = rest;
    }
    residual
}
