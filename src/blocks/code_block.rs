//! Indented code block (spec.md §4.D): one or more lines each indented by
//! exactly one tab stop, blank lines allowed between them, trailing
//! newlines stripped.

use super::util::{is_blank, strip_indentation, take_line};

pub fn code_block(input: &str, tab_stop: usize) -> Option<(String, &str)> {
    let mut lines: Vec<String> = Vec::new();
    let mut confirmed_remaining = input;
    let mut cursor = input;
    let mut pending_blanks = 0usize;

    loop {
        if cursor.is_empty() {
            break;
        }
        let (line, rest) = take_line(cursor);
        if is_blank(line) {
            pending_blanks += 1;
            cursor = rest;
            continue;
        }
        match strip_indentation(line, tab_stop, tab_stop) {
            Some(content) => {
                for _ in 0..pending_blanks {
                    lines.push(String::new());
                }
                pending_blanks = 0;
                lines.push(content.to_string());
                cursor = rest;
                confirmed_remaining = cursor;
            }
            None => break,
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some((lines.join("\n"), confirmed_remaining))
    }
}
