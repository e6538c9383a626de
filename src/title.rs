//! Title block (spec.md §4.G): optional leading `%`-prefixed title,
//! authors and date lines, each of which may wrap onto following lines
//! that begin with at least one space. Recognized only in non-strict mode;
//! a single empty `%` line is not a title (spec.md §8 Boundary).

use crate::ast::Meta;
use crate::blocks::util::{skip_blank_lines, take_line};
use crate::raw::decode_character_references;
use crate::state::ParserState;

fn collect_field(input: &str) -> (String, &str) {
    let (first, mut cursor) = take_line(input);
    let mut text = first.trim_start_matches('%').trim_start().to_string();
    loop {
        let (line, rest) = take_line(cursor);
        if line.starts_with(' ') || line.starts_with('\t') {
            text.push(' ');
            text.push_str(line.trim());
            cursor = rest;
        } else {
            break;
        }
    }
    (text, cursor)
}

/// Returns the parsed `Meta` (empty if no title block is present) and the
/// remaining input with the title block consumed.
pub fn title_block<'a>(input: &'a str, state: &mut ParserState) -> (Meta, &'a str) {
    let mut meta = Meta::default();
    if state.options.strict {
        return (meta, input);
    }
    let (first_line, _) = take_line(input);
    if !first_line.starts_with('%') {
        return (meta, input);
    }
    if first_line.trim_start_matches('%').trim().is_empty() {
        return (meta, input);
    }

    let (title_text, mut cursor) = collect_field(input);
    meta.title = crate::inlines::parse_inlines(&decode_character_references(&title_text), state);

    if cursor.starts_with('%') {
        let (authors_text, rest) = collect_field(cursor);
        meta.authors = authors_text
            .split(';')
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(|a| decode_character_references(a))
            .collect();
        cursor = rest;
    }

    if cursor.starts_with('%') {
        let (date_text, rest) = collect_field(cursor);
        meta.date = decode_character_references(date_text.trim());
        cursor = rest;
    }

    (meta, skip_blank_lines(cursor))
}
