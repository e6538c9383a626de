//! Small line/indentation helpers shared by the block parsers. Tab-aware,
//! grounded on the teacher's `grammar::shared::count_indentation` /
//! `skip_indentation` (generalized from a fixed 4-space tab stop to
//! `ParserState.options.tab_stop`).

/// Effective column width of `input`'s leading run of spaces/tabs.
pub fn count_indentation(input: &str, tab_stop: usize) -> usize {
    let mut cols = 0;
    for ch in input.chars() {
        match ch {
            ' ' => cols += 1,
            '\t' => cols += tab_stop - (cols % tab_stop),
            _ => break,
        }
    }
    cols
}

/// Byte length of the leading run of spaces/tabs whose effective width is
/// exactly `cols` columns (used to strip one tab stop of list/quote/code
/// indentation). Returns `None` if the line has less indentation than that.
pub fn strip_indentation(input: &str, cols: usize, tab_stop: usize) -> Option<&str> {
    let mut budget = cols;
    let mut bytes = 0;
    for ch in input.chars() {
        if budget == 0 {
            break;
        }
        match ch {
            ' ' => {
                budget -= 1;
                bytes += 1;
            }
            '\t' => {
                let width = tab_stop - (bytes % tab_stop).min(tab_stop - 1);
                if width <= budget {
                    budget -= width;
                    bytes += 1;
                } else {
                    return None;
                }
            }
            _ => return None,
        }
    }
    if budget > 0 {
        return None;
    }
    Some(&input[bytes..])
}

/// True if `line` contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split off the first line (without its trailing `\n`) and the rest.
pub fn take_line(input: &str) -> (&str, &str) {
    match input.find('\n') {
        Some(idx) => (&input[..idx], &input[idx + 1..]),
        None => (input, ""),
    }
}

/// Consume leading blank lines, returning the remainder.
pub fn skip_blank_lines(mut input: &str) -> &str {
    loop {
        let (line, rest) = take_line(input);
        if is_blank(line) && !input.is_empty() {
            input = rest;
        } else {
            break;
        }
    }
    input
}
