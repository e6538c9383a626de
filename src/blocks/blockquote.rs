//! Block quotes (spec.md §4.D): email-style (`> `, lazy continuation) and
//! Emacs-box (`,----` / `| ...` / `` `---- ``).

use super::util::{is_blank, take_line};

fn strip_marker(line: &str) -> Option<&str> {
    let trimmed = line.strip_prefix("   ").or_else(|| line.strip_prefix("  ")).or_else(|| line.strip_prefix(' ')).unwrap_or(line);
    let after = trimmed.strip_prefix('>')?;
    Some(after.strip_prefix(' ').unwrap_or(after))
}

/// Collect the interior text of an email-style block quote: `>`-marked
/// lines with the marker stripped, plus lazily-continued non-blank lines
/// that follow without an intervening blank line. Stops at the first blank
/// line (or EOF). Returns `(interior_text, rest)`.
pub fn email_blockquote(input: &str) -> Option<(String, &str)> {
    let (first, _) = take_line(input);
    strip_marker(first)?;

    let mut interior = String::new();
    let mut cursor = input;
    let mut started = false;
    loop {
        if cursor.is_empty() {
            break;
        }
        let (line, rest) = take_line(cursor);
        if is_blank(line) {
            break;
        }
        match strip_marker(line) {
            Some(content) => {
                interior.push_str(content);
                interior.push('\n');
                started = true;
            }
            None if started => {
                // lazy continuation: a line with no `>` that continues the
                // quoted paragraph.
                interior.push_str(line);
                interior.push('\n');
            }
            None => break,
        }
        cursor = rest;
    }
    Some((interior, cursor))
}

/// `,----\n| line\n| line\n` ... `` `---- ``.
pub fn emacs_box_blockquote(input: &str) -> Option<(String, &str)> {
    let (open, mut cursor) = take_line(input);
    if !open.trim_start().starts_with(",----") {
        return None;
    }
    let mut interior = String::new();
    loop {
        if cursor.is_empty() {
            return None; // unterminated box; not a valid emacs-box quote
        }
        let (line, rest) = take_line(cursor);
        let trimmed_start = line.trim_start();
        if trimmed_start.starts_with('`') && trimmed_start.trim_start_matches('`').starts_with("----") {
            cursor = rest;
            break;
        }
        let content = trimmed_start.strip_prefix('|').unwrap_or(trimmed_start);
        let content = content.strip_prefix(' ').unwrap_or(content);
        interior.push_str(content);
        interior.push('\n');
        cursor = rest;
    }
    Some((interior, cursor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_style_basic() {
        let (interior, rest) = email_blockquote("> a\n> b\n\nnext").unwrap();
        assert_eq!(interior, "a\nb\n");
        assert_eq!(rest, "\nnext");
    }

    #[test]
    fn email_style_lazy_continuation() {
        let (interior, _rest) = email_blockquote("> a\nb\n\nnext").unwrap();
        assert_eq!(interior, "a\nb\n");
    }

    #[test]
    fn emacs_box_basic() {
        let (interior, rest) = emacs_box_blockquote(",----\n| a\n| b\n`----\nnext").unwrap();
        assert_eq!(interior, "a\nb\n");
        assert_eq!(rest, "next");
    }
}
