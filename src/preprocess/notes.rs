//! Pass 2 (spec.md §4.B): `noteBlock` — `[^id]:`, optional blank, then raw
//! lines indented one tab stop; the captured text is re-parsed as blocks
//! via the re-entry bridge (component H).

use std::collections::{BTreeMap, HashSet};

use crate::blocks::util::{count_indentation, is_blank, strip_indentation, take_line};
use crate::state::ParserState;

use super::take_line_clump;

fn note_block(input: &str, tab_stop: usize) -> Option<(String, String, &str)> {
    let (first_line, mut cursor) = take_line(input);
    let trimmed = first_line.trim_start();
    let leading = first_line.len() - trimmed.len();
    if leading >= tab_stop {
        return None;
    }
    let after_marker = trimmed.strip_prefix("[^")?;
    let close = after_marker.find(']')?;
    let id = after_marker[..close].to_string();
    let after_colon = after_marker[close + 1..].strip_prefix(':')?;

    let mut body = String::new();
    let first_content = after_colon.trim_start();
    if !first_content.is_empty() {
        body.push_str(first_content);
        body.push('\n');
    }

    loop {
        if cursor.is_empty() {
            break;
        }
        let (line, rest) = take_line(cursor);
        if is_blank(line) {
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
                found_more = count_indentation(peek, tab_stop) >= tab_stop;
                break;
            }
            if !found_more {
                break;
            }
            body.push('\n');
            cursor = rest;
            continue;
        }
        match strip_indentation(line, tab_stop, tab_stop) {
            Some(content) => {
                body.push_str(content);
                body.push('\n');
                cursor = rest;
            }
            None => break,
        }
    }
    Some((id, body, cursor))
}

/// Scans a raw (unparsed) note body for `[^id]` references, to order body
/// parsing by dependency below. Not a real inline parse — just enough
/// lexing to find the ids a body's `footnote_ref`s will look up.
fn referenced_note_ids(body: &str) -> Vec<String> {
    let mut ids = Vec::new();
    let mut rest = body;
    while let Some(start) = rest.find("[^") {
        let after = &rest[start + 2..];
        match after.find(']') {
            Some(end) => {
                ids.push(after[..end].to_string());
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    ids
}

/// Parses `id`'s body and inserts it into `state.notes`, first recursing
/// into any note ids its raw text references, so a note that forward-
/// references a later note (`[^a]: see [^b]` defined after `[^a]`) still
/// resolves it: by the time `a`'s body is handed to
/// `reentry::parse_from_string`, `state.notes["b"]` already exists
/// (spec.md §9 "cyclic-looking definitions"). `parsing` guards against
/// genuine cycles (`a` referencing `b` referencing `a`): a note still being
/// parsed is skipped rather than recursed into again, so its `footnote_ref`
/// simply doesn't resolve yet and falls through to literal text.
fn parse_note_body(
    id: &str,
    raw_notes: &BTreeMap<String, String>,
    state: &mut ParserState,
    parsing: &mut HashSet<String>,
) {
    if state.notes.contains_key(id) || parsing.contains(id) {
        return;
    }
    let Some(body) = raw_notes.get(id) else {
        return;
    };
    parsing.insert(id.to_string());
    for referenced in referenced_note_ids(body) {
        if referenced != id {
            parse_note_body(&referenced, raw_notes, state, parsing);
        }
    }
    let mut sentineled = body.clone();
    sentineled.push('\n');
    let blocks = crate::reentry::parse_from_string(&sentineled, state);
    state.notes.insert(id.to_string(), blocks);
    parsing.remove(id);
}

pub fn extract_notes(input: &str, state: &mut ParserState) -> String {
    let mut residual = String::new();
    let mut raw_notes: BTreeMap<String, String> = BTreeMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut cursor = input;
    while !cursor.is_empty() {
        if let Some((id, body, rest)) = note_block(cursor, state.options.tab_stop) {
            if !raw_notes.contains_key(&id) {
                order.push(id.clone());
            }
            raw_notes.insert(id, body);
            cursor = rest;
            continue;
        }
        let (clump, rest) = take_line_clump(cursor);
        residual.push_str(clump);
        cursor = rest;
    }

    // Every id/raw body in the residual is known before any body is parsed,
    // so `parse_note_body`'s dependency recursion can always find a
    // forward-referenced note's raw text already collected.
    let mut parsing = HashSet::new();
    for id in &order {
        parse_note_body(id, &raw_notes, state, &mut parsing);
    }
    residual
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Inline};
    use crate::config::ReaderOptions;

    #[test]
    fn extracts_simple_note() {
        let mut state = ParserState::new(ReaderOptions::default());
        let residual = extract_notes("Here[^1] is.\n\n[^1]: footnote body.\n\n", &mut state);
        assert!(residual.contains("Here[^1] is."));
        let body = state.notes.get("1").unwrap();
        match &body[0] {
            Block::Para(inlines) | Block::Plain(inlines) => {
                assert!(inlines.contains(&Inline::Str("footnote".to_string())));
            }
            _ => panic!("expected parsed note body"),
        }
    }

    #[test]
    fn continuation_lines_indented_one_tab_stop() {
        let mut state = ParserState::new(ReaderOptions::default());
        extract_notes("[^1]: line one\n    line two\n\n", &mut state);
        let body = state.notes.get("1").unwrap();
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn note_resolves_forward_reference_to_a_later_note() {
        // spec.md §9: a note's body may reference a note defined later in
        // the document; it must still resolve to a nested `Note`, not
        // literal `[^b]` text.
        let mut state = ParserState::new(ReaderOptions::default());
        extract_notes("[^a]: see [^b]\n\n[^b]: the target.\n\n", &mut state);
        let body_a = state.notes.get("a").expect("note a parsed");
        let resolved = body_a.iter().any(|block| match block {
            Block::Para(inlines) | Block::Plain(inlines) => {
                inlines.iter().any(|i| matches!(i, Inline::Note(_)))
            }
            _ => false,
        });
        assert!(resolved, "note a should contain a nested Note for [^b], got {body_a:?}");
    }
}
