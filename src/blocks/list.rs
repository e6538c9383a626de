//! Bullet, ordered and definition lists (spec.md §4.D "Lists",
//! "Definition list"). Item bodies are dedented and re-parsed as blocks via
//! `reentry::parse_from_string` with `ParserContext::ListItemState`
//! installed, so a fresh top-level marker inside the body structurally ends
//! the preceding paragraph/plain run (spec.md §4.E "Endline").

use crate::ast::{Block, ListNumberDelim, ListNumberStyle};
use crate::normalize::compactify;
use crate::reentry::parse_in_list_item;
use crate::state::ParserState;

use super::util::{count_indentation, is_blank, strip_indentation, take_line};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Marker {
    Bullet,
    Ordered(u32, ListNumberStyle, ListNumberDelim),
}

/// Numerals for which a single-letter roman reading collides with a
/// single-letter alphabetic reading (spec.md §9 Open Question — preserved
/// exactly as the set `{1,5,10,50,100,500,1000}`).
const AMBIGUOUS_NUMERALS: &[u32] = &[1, 5, 10, 50, 100, 500, 1000];

fn roman_value(s: &str) -> Option<u32> {
    let upper = s.to_ascii_uppercase();
    if upper.is_empty() || !upper.chars().all(|c| "IVXLCDM".contains(c)) {
        return None;
    }
    let val = |c: char| match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    };
    let chars: Vec<char> = upper.chars().collect();
    let mut total = 0i64;
    for i in 0..chars.len() {
        let v = val(chars[i]) as i64;
        if i + 1 < chars.len() && v < val(chars[i + 1]) as i64 {
            total -= v;
        } else {
            total += v;
        }
    }
    if total <= 0 {
        None
    } else {
        Some(total as u32)
    }
}

/// Parses one list marker at the start of `line` (already stripped of
/// leading indentation). Returns `(marker, marker_byte_len)` where
/// `marker_byte_len` does *not* include the separating whitespace.
/// Used by `endline`/paragraph continuation (spec.md §4.E): does `line`
/// (already dedented) open a fresh list item?
pub(super) fn starts_list_marker(line: &str, strict: bool) -> bool {
    detect_marker(line, strict).is_some()
}

fn detect_marker(line: &str, strict: bool) -> Option<(Marker, usize)> {
    let mut chars = line.char_indices();
    let (_, first) = chars.next()?;

    if !strict && (first == '*' || first == '+' || first == '-') {
        // Must not also read as a horizontal rule; caller tries `hrule`
        // after `list` in the disambiguation order, but a bullet marker
        // must still be followed by a space to count as a marker at all.
        let after = &line[1..];
        if after.starts_with(' ') || after.starts_with('\t') {
            return Some((Marker::Bullet, 1));
        }
        return None;
    }
    if strict && (first == '*' || first == '+' || first == '-') {
        let after = &line[1..];
        if after.starts_with(' ') {
            return Some((Marker::Bullet, 1));
        }
        return None;
    }

    // Decimal.
    let digit_end = line.find(|c: char| !c.is_ascii_digit()).unwrap_or(line.len());
    if digit_end > 0 {
        // Guard: "p. <digits>" page-number idiom is excluded by the
        // caller (it never calls detect_marker with a `p`/`P` prefix as
        // part of the marker itself, since `p` is alphabetic, see below).
        if let Ok(n) = line[..digit_end].parse::<u32>() {
            let rest = &line[digit_end..];
            if let Some(delim) = period_or_parens(rest, false) {
                return Some((
                    Marker::Ordered(n, ListNumberStyle::Decimal, delim.0),
                    digit_end + delim.1,
                ));
            }
        }
        return None;
    }

    if strict {
        return None; // strict mode: only decimal `N.` markers.
    }

    // Roman / alpha, lower or upper, single or multiple letters.
    let letters_end = line
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(line.len());
    if letters_end == 0 {
        return None;
    }
    let marker_text = &line[..letters_end];
    let rest = &line[letters_end..];
    let upper = marker_text.chars().next().unwrap().is_ascii_uppercase();

    // Page-number guard: "p. 5" must not be read as an alpha marker.
    if marker_text.eq_ignore_ascii_case("p") {
        return None;
    }

    let roman = roman_value(marker_text);
    let is_single_letter = marker_text.chars().count() == 1;
    let ambiguous_single =
        is_single_letter && roman.map(|n| AMBIGUOUS_NUMERALS.contains(&n)).unwrap_or(false);

    let style = if let Some(n) = roman {
        if is_single_letter && !ambiguous_single {
            // A single letter that happens to parse as roman but is not in
            // the ambiguous set (can't happen: I,V,X,L,C,D,M are exactly
            // the ambiguous set) — unreachable in practice, kept for clarity.
            if upper {
                ListNumberStyle::UpperAlpha
            } else {
                ListNumberStyle::LowerAlpha
            }
        } else if upper {
            ListNumberStyle::UpperRoman
        } else {
            ListNumberStyle::LowerRoman
        }
    } else if is_single_letter {
        if upper {
            ListNumberStyle::UpperAlpha
        } else {
            ListNumberStyle::LowerAlpha
        }
    } else {
        return None; // multi-letter, non-roman: not a marker.
    };

    let requires_wide_sep = (ambiguous_single && upper) || matches!(style, ListNumberStyle::UpperAlpha);
    let delim = period_or_parens(rest, requires_wide_sep)?;

    let start = match style {
        ListNumberStyle::LowerRoman | ListNumberStyle::UpperRoman => roman.unwrap_or(1),
        ListNumberStyle::LowerAlpha => {
            (marker_text.chars().next().unwrap() as u32) - ('a' as u32) + 1
        }
        ListNumberStyle::UpperAlpha => {
            (marker_text.chars().next().unwrap() as u32) - ('A' as u32) + 1
        }
        _ => 1,
    };
    Some((Marker::Ordered(start, style, delim.0), letters_end + delim.1))
}

/// Parses the delimiter after a marker's letters/digits. `requires_wide_sep`
/// forces `Period` delimiters to be followed by a tab or two spaces rather
/// than one (spec.md §4.D), to avoid "A. Smith" reading as a list.
fn period_or_parens(rest: &str, requires_wide_sep: bool) -> Option<(ListNumberDelim, usize)> {
    if let Some(after) = rest.strip_prefix(')') {
        if after.starts_with(' ') || after.is_empty() {
            return Some((ListNumberDelim::OneParen, 1));
        }
        return None;
    }
    if let Some(after) = rest.strip_prefix('.') {
        if requires_wide_sep {
            if after.starts_with('\t') || after.starts_with("  ") {
                return Some((ListNumberDelim::Period, 1));
            }
            return None;
        }
        if after.starts_with(' ') || after.starts_with('\t') || after.is_empty() {
            return Some((ListNumberDelim::Period, 1));
        }
        return None;
    }
    if rest.starts_with('(') {
        // "(1)" form: TwoParens.
        if let Some(close) = rest.find(')') {
            let inner = &rest[1..close];
            if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Some((ListNumberDelim::TwoParens, close + 1));
            }
        }
        return None;
    }
    None
}

/// Extract one list item's body starting at `input` (which must begin with
/// a recognized marker of `expect` shape — checked by the caller). Returns
/// `(content_indent, body, rest)`: `content_indent` is the column all
/// continuation lines must meet or exceed.
fn take_item(input: &str, marker_len: usize, tab_stop: usize) -> (usize, String, &str) {
    let (first_line, mut cursor) = take_line(input);
    let after_marker = &first_line[marker_len..];
    let gap = after_marker.len() - after_marker.trim_start_matches([' ', '\t']).len();
    let content_indent = marker_len + gap.max(1);
    let mut body = after_marker.trim_start_matches([' ', '\t']).to_string();
    body.push('\n');

    loop {
        if cursor.is_empty() {
            break;
        }
        let (line, rest) = take_line(cursor);
        if is_blank(line) {
            // A blank line continues the item only if more indented content
            // (or another blank) follows; otherwise it ends the item and is
            // left for the caller (list/block-level blank handling).
            let mut lookahead = rest;
            let mut found_more = false;
            loop {
                if lookahead.is_empty() {
                    break;
                }
                let (peek, peek_rest) = take_line(lookahead);
                if is_blank(peek) {
                    lookahead = peek_rest;
                    continue;
                }
                found_more = count_indentation(peek, tab_stop) >= content_indent;
                break;
            }
            if !found_more {
                break;
            }
            body.push('\n');
            cursor = rest;
            continue;
        }
        match strip_indentation(line, content_indent, tab_stop) {
            Some(content) => {
                body.push_str(content);
                body.push('\n');
                cursor = rest;
            }
            None => break,
        }
    }
    (content_indent, body, cursor)
}

pub fn bullet_list(input: &str, state: &mut ParserState) -> Option<(Block, &str)> {
    let indent = count_indentation(input, state.options.tab_stop);
    if indent >= state.options.tab_stop {
        return None;
    }
    let line_start = strip_indentation(input, indent, state.options.tab_stop).unwrap_or(input);
    let (marker, marker_len) = detect_marker(line_start, state.options.strict)?;
    if !matches!(marker, Marker::Bullet) {
        return None;
    }

    let mut items = Vec::new();
    let mut cursor = input;
    loop {
        let indent = count_indentation(cursor, state.options.tab_stop);
        if indent >= state.options.tab_stop {
            break;
        }
        let line_start = match strip_indentation(cursor, indent, state.options.tab_stop) {
            Some(s) => s,
            None => break,
        };
        let (marker, marker_len) = match detect_marker(line_start, state.options.strict) {
            Some(m) if matches!(m.0, Marker::Bullet) => m,
            _ => break,
        };
        let _ = marker;
        let (_content_indent, body, rest) = take_item(line_start, marker_len, state.options.tab_stop);
        items.push(parse_in_list_item(&body, state));
        cursor = skip_blank_separator(rest);
    }
    if items.is_empty() {
        return None;
    }
    Some((Block::BulletList(compactify(items)), cursor))
}

pub fn ordered_list(input: &str, state: &mut ParserState) -> Option<(Block, &str)> {
    let indent = count_indentation(input, state.options.tab_stop);
    if indent >= state.options.tab_stop {
        return None;
    }
    let line_start = strip_indentation(input, indent, state.options.tab_stop).unwrap_or(input);
    let (first_marker, _) = detect_marker(line_start, state.options.strict)?;
    let (start, style, delim) = match first_marker {
        Marker::Ordered(n, s, d) => (n, s, d),
        Marker::Bullet => return None,
    };

    let mut items = Vec::new();
    let mut cursor = input;
    loop {
        let indent = count_indentation(cursor, state.options.tab_stop);
        if indent >= state.options.tab_stop {
            break;
        }
        let line_start = match strip_indentation(cursor, indent, state.options.tab_stop) {
            Some(s) => s,
            None => break,
        };
        let (marker, marker_len) = match detect_marker(line_start, state.options.strict) {
            Some(m) => m,
            None => break,
        };
        // Style mixing within one list is forbidden: stop at the first
        // item whose style/delim disagrees with the list's established
        // shape (spec.md §4.D "Ordered list start reuse").
        match marker {
            Marker::Ordered(_, s, d) if s == style && d == delim => {}
            _ => break,
        }
        let (_content_indent, body, rest) = take_item(line_start, marker_len, state.options.tab_stop);
        items.push(parse_in_list_item(&body, state));
        cursor = skip_blank_separator(rest);
    }
    if items.is_empty() {
        return None;
    }
    Some((
        Block::OrderedList((start, style, delim), compactify(items)),
        cursor,
    ))
}

/// A definition list term line, then one or more `:`-introduced definition
/// bodies (spec.md §4.D "Definition list").
pub fn definition_list(input: &str, state: &mut ParserState) -> Option<(Block, &str)> {
    if state.options.strict {
        return None;
    }
    let mut pairs = Vec::new();
    let mut cursor = input;
    loop {
        let (term_line, after_term) = take_line(cursor);
        if term_line.trim().is_empty() || count_indentation(term_line, state.options.tab_stop) > 0 {
            break;
        }
        let (colon_line, _) = take_line(after_term);
        let stripped = colon_line.trim_start();
        if !stripped.starts_with(':') {
            break;
        }

        let term = crate::inlines::parse_inlines(term_line.trim(), state);
        let mut defs = Vec::new();
        let mut def_cursor = after_term;
        loop {
            let (colon_line, _) = take_line(def_cursor);
            let stripped = colon_line.trim_start();
            if stripped.strip_prefix(':').is_none() {
                break;
            }
            let marker_len = colon_line.len() - stripped.len() + 1;
            let (_indent, body, rest) = take_item(def_cursor, marker_len, state.options.tab_stop);
            defs.push(parse_in_list_item(&body, state));
            def_cursor = skip_blank_separator(rest);
        }
        if defs.is_empty() {
            break;
        }
        pairs.push((term, defs.into_iter().flatten().collect()));
        cursor = def_cursor;
    }
    if pairs.is_empty() {
        None
    } else {
        Some((Block::DefinitionList(pairs), cursor))
    }
}

fn skip_blank_separator(input: &str) -> &str {
    let (line, rest) = take_line(input);
    if is_blank(line) && !input.is_empty() {
        rest
    } else {
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Inline;
    use crate::config::ReaderOptions;

    #[test]
    fn bullet_list_two_items() {
        let mut state = ParserState::new(ReaderOptions::default());
        let (block, rest) = bullet_list("- a\n- b\n", &mut state).unwrap();
        assert_eq!(rest, "");
        match block {
            Block::BulletList(items) => assert_eq!(items.len(), 2),
            _ => panic!("expected bullet list"),
        }
    }

    #[test]
    fn ordered_decimal_list() {
        let mut state = ParserState::new(ReaderOptions::default());
        let (block, _) = ordered_list("1. a\n2. b\n", &mut state).unwrap();
        match block {
            Block::OrderedList((start, style, delim), items) => {
                assert_eq!(start, 1);
                assert_eq!(style, ListNumberStyle::Decimal);
                assert_eq!(delim, ListNumberDelim::Period);
                assert_eq!(items.len(), 2);
            }
            _ => panic!("expected ordered list"),
        }
    }

    #[test]
    fn upper_alpha_requires_wide_separator() {
        assert!(detect_marker("A. Smith", false).is_none());
        assert!(detect_marker("A.\tSmith", false).is_some());
    }

    #[test]
    fn page_number_guard() {
        assert!(detect_marker("p. 5", false).is_none());
    }

    #[test]
    fn lowercase_ambiguous_roman_does_not_require_wide_separator() {
        // spec.md §4.D scopes the wide-separator rule to UpperAlpha and
        // upper-case ambiguous roman numerals only; "i." is plain lower-roman.
        let (marker, len) = detect_marker("i. second", false).expect("should parse as a marker");
        assert_eq!(marker, Marker::Ordered(1, ListNumberStyle::LowerRoman, ListNumberDelim::Period));
        assert_eq!(len, 2);
    }

    #[test]
    fn definition_list_basic() {
        let mut state = ParserState::new(ReaderOptions::default());
        let (block, _) = definition_list("Term\n: definition text\n", &mut state).unwrap();
        match block {
            Block::DefinitionList(pairs) => {
                assert_eq!(pairs.len(), 1);
                assert_eq!(pairs[0].0, vec![Inline::Str("Term".to_string())]);
            }
            _ => panic!("expected definition list"),
        }
    }
}
