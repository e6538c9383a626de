//! Multi-pass preprocessing (spec.md §4.B): extract reference-key and
//! footnote definitions before the block parser ever sees the input.

mod keys;
mod notes;

use crate::blocks::util::{is_blank, take_line};
use crate::state::ParserState;

/// A maximal run of non-blank lines followed by any blank lines (spec.md
/// §3 "LineClump"). Progress is guaranteed even on an all-blank remainder.
pub(super) fn take_line_clump(input: &str) -> (&str, &str) {
    let mut cursor = input;
    loop {
        if cursor.is_empty() {
            break;
        }
        let (line, rest) = take_line(cursor);
        if is_blank(line) {
            break;
        }
        cursor = rest;
    }
    loop {
        if cursor.is_empty() {
            break;
        }
        let (line, rest) = take_line(cursor);
        if is_blank(line) {
            cursor = rest;
        } else {
            break;
        }
    }
    let consumed = input.len() - cursor.len();
    (&input[..consumed], cursor)
}

/// Appends the `"\n\n"` sentinel, then runs passes 1 and 2, installing
/// `state.keys`/`state.notes`. Returns the residual input for pass 3 (the
/// block parser), with blank-line structure between former key/note
/// definitions preserved (spec.md §3 invariant).
pub fn run(source: &str, state: &mut ParserState) -> String {
    let mut sentineled = source.to_string();
    sentineled.push_str("\n\n");
    let after_keys = keys::extract_keys(&sentineled, state);
    notes::extract_notes(&after_keys, state)
}
