//! Table sub-parser (spec.md §4.F): simple and multiline variants, both
//! `try`'d atomically by the caller. Column break indices come from the
//! dashed rule; alignment is inferred from header spacing relative to each
//! dash run; widths are fractions of `S.columns`.

use crate::ast::{Alignment, Block, Inline};
use crate::runtime::try_state;
use crate::state::ParserState;

use super::util::{is_blank, skip_blank_lines, take_line};

/// One dash run's `(dashes, dashes + trailing spaces)`.
struct ColumnRun {
    dash_len: usize,
    total_len: usize,
}

/// `line` is a dashed rule iff, after leading spaces, it is entirely made
/// of `-`-runs separated by single/multiple spaces. Returns the leading
/// space count and the per-column runs.
fn parse_dash_rule(line: &str) -> Option<(usize, Vec<ColumnRun>)> {
    let init_sp = line.len() - line.trim_start_matches(' ').len();
    let mut rest = &line[init_sp..];
    if rest.is_empty() || !rest.starts_with('-') {
        return None;
    }
    let mut runs = Vec::new();
    while !rest.is_empty() {
        if !rest.starts_with('-') {
            return None;
        }
        let dash_len = rest.len() - rest.trim_start_matches('-').len();
        rest = &rest[dash_len..];
        let sp_len = rest.len() - rest.trim_start_matches(' ').len();
        runs.push(ColumnRun {
            dash_len,
            total_len: dash_len + sp_len,
        });
        rest = &rest[sp_len..];
    }
    Some((init_sp, runs))
}

fn is_dash_rule_line(line: &str) -> bool {
    parse_dash_rule(line).is_some()
}

/// Cumulative column break offsets, counted in characters.
fn break_indices(init_sp: usize, runs: &[ColumnRun]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(runs.len());
    let mut acc = init_sp;
    for run in runs {
        acc += run.total_len;
        indices.push(acc);
    }
    indices
}

fn raw_slice(line: &str, start: usize, end: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    let end = end.min(chars.len());
    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect()
}

/// Split `line` at the column break indices into trimmed cell strings; the
/// last column absorbs whatever remains of the line.
fn split_by_indices(line: &str, indices: &[usize]) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut cells = Vec::with_capacity(indices.len());
    let mut start = 0usize;
    for (i, &end) in indices.iter().enumerate() {
        let slice_end = if i + 1 == indices.len() {
            chars.len()
        } else {
            end.min(chars.len())
        };
        let slice_end = slice_end.max(start);
        let raw: String = chars[start..slice_end].iter().collect();
        cells.push(raw.trim().to_string());
        start = end.min(chars.len());
    }
    cells
}

/// `(L, R)` mapped per spec.md §4.F: `L` = left char of the column's
/// shortest header string is space/tab; `R` = the string is shorter than
/// the dash run, or its char at `dash_len - 1` is space/tab.
fn infer_alignment(raw_header_strs: &[String], dash_len: usize) -> Alignment {
    let chosen = raw_header_strs
        .iter()
        .filter(|s| !s.trim().is_empty())
        .min_by_key(|s| s.trim().chars().count());
    let raw = match chosen {
        Some(s) => s.as_str(),
        None => return Alignment::Default,
    };
    let chars: Vec<char> = raw.chars().collect();
    let trimmed_len = raw.trim().chars().count();
    let l = chars.first().map(|c| *c == ' ' || *c == '\t').unwrap_or(true);
    let r = trimmed_len < dash_len
        || chars
            .get(dash_len.saturating_sub(1))
            .map(|c| *c == ' ' || *c == '\t')
            .unwrap_or(true);
    match (l, r) {
        (true, false) => Alignment::Right,
        (false, true) => Alignment::Left,
        (true, true) => Alignment::Center,
        (false, false) => Alignment::Default,
    }
}

fn compute_widths(indices: &[usize], columns: usize) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(indices.len());
    let mut prev = 0usize;
    for &idx in indices {
        lengths.push(idx.saturating_sub(prev));
        prev = idx;
    }
    let total: usize = lengths.iter().sum();
    let denominator = total.max(columns) as f64;
    lengths.iter().map(|&l| l as f64 / denominator).collect()
}

fn maybe_caption<'a>(input: &'a str, state: &mut ParserState) -> (Vec<Inline>, &'a str) {
    let cursor = skip_blank_lines(input);
    let (line, rest) = take_line(cursor);
    match line.strip_prefix("Table:") {
        Some(text) => (crate::inlines::parse_inlines(text.trim(), state), rest),
        None => (Vec::new(), cursor),
    }
}

fn cells_to_inlines(cells: &[String], state: &mut ParserState) -> Vec<Vec<Inline>> {
    cells
        .iter()
        .map(|c| crate::inlines::parse_inlines(c, state))
        .collect()
}

fn simple_table<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    let (header_line, after_header) = take_line(input);
    if is_blank(header_line) || is_dash_rule_line(header_line) {
        return None;
    }
    let (rule_line, after_rule) = take_line(after_header);
    let (init_sp, runs) = parse_dash_rule(rule_line)?;
    let indices = break_indices(init_sp, &runs);

    let header_cells = split_by_indices(header_line, &indices);
    let headers = cells_to_inlines(&header_cells, state);

    let aligns: Vec<Alignment> = runs
        .iter()
        .enumerate()
        .map(|(i, run)| {
            let start = if i == 0 { 0 } else { indices[i - 1] };
            let raw = raw_slice(header_line, start, indices[i]);
            infer_alignment(&[raw], run.dash_len)
        })
        .collect();

    let mut rows = Vec::new();
    let mut cursor = after_rule;
    loop {
        if cursor.is_empty() {
            break;
        }
        let (line, rest) = take_line(cursor);
        if is_blank(line) {
            cursor = rest;
            break;
        }
        let cells = split_by_indices(line, &indices);
        rows.push(cells_to_inlines(&cells, state));
        cursor = rest;
    }

    let widths = compute_widths(&indices, state.options.columns);
    let (caption, rest) = maybe_caption(cursor, state);

    Some((
        Block::Table {
            caption,
            aligns,
            widths,
            headers,
            rows,
        },
        rest,
    ))
}

fn multiline_table<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    let (first_rule, after_first) = take_line(input);
    let (init_sp, runs) = parse_dash_rule(first_rule)?;
    let indices = break_indices(init_sp, &runs);
    let num_cols = indices.len();

    let mut header_lines: Vec<&str> = Vec::new();
    let mut cursor = after_first;
    loop {
        if cursor.is_empty() {
            return None; // unterminated header: no closing dash rule.
        }
        let (line, rest) = take_line(cursor);
        if is_dash_rule_line(line) {
            cursor = rest;
            break;
        }
        if is_blank(line) {
            return None;
        }
        header_lines.push(line);
        cursor = rest;
    }
    if header_lines.is_empty() {
        return None;
    }

    let mut headers = Vec::with_capacity(num_cols);
    let mut aligns = Vec::with_capacity(num_cols);
    for i in 0..num_cols {
        let start = if i == 0 { 0 } else { indices[i - 1] };
        let end = indices[i];
        let raws: Vec<String> = header_lines.iter().map(|l| raw_slice(l, start, end)).collect();
        let joined = raws
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        headers.push(crate::inlines::parse_inlines(&joined, state));
        aligns.push(infer_alignment(&raws, runs[i].dash_len));
    }

    let mut rows = Vec::new();
    loop {
        if cursor.is_empty() {
            break;
        }
        let (peek, _) = take_line(cursor);
        if is_dash_rule_line(peek) {
            let (_, rest) = take_line(cursor);
            cursor = rest;
            break;
        }

        let mut row_lines: Vec<&str> = Vec::new();
        loop {
            if cursor.is_empty() {
                break;
            }
            let (line, rest) = take_line(cursor);
            if is_blank(line) {
                cursor = rest;
                break;
            }
            row_lines.push(line);
            cursor = rest;
        }
        if row_lines.is_empty() {
            continue;
        }

        let mut row = Vec::with_capacity(num_cols);
        for i in 0..num_cols {
            let start = if i == 0 { 0 } else { indices[i - 1] };
            let end = indices[i];
            let joined = row_lines
                .iter()
                .map(|l| raw_slice(l, start, end).trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            row.push(crate::inlines::parse_inlines(&joined, state));
        }
        rows.push(row);
    }

    let widths = compute_widths(&indices, state.options.columns);
    let (caption, rest) = maybe_caption(cursor, state);

    Some((
        Block::Table {
            caption,
            aligns,
            widths,
            headers,
            rows,
        },
        rest,
    ))
}

pub fn table<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    if let Some(result) = try_state(state, |s| multiline_table(input, s)) {
        return Some(result);
    }
    try_state(state, |s| simple_table(input, s))
}
