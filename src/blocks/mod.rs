//! Block parser (spec.md §4.D): tries each block kind in the fixed
//! disambiguation order, leftmost match wins, each alternative atomic.

mod blockquote;
mod code_block;
mod header;
mod hrule;
mod html_block;
mod list;
mod paragraph;
mod table;
pub(crate) mod util;

use crate::ast::Block;
use crate::raw;
use crate::runtime::try_state;
use crate::state::ParserState;

use util::skip_blank_lines;

fn header_block(input: &str, state: &mut ParserState) -> Option<(Block, &str)> {
    if let Some((level, text, rest)) = header::atx_header(input) {
        let inlines = crate::inlines::parse_inlines(text, state);
        return Some((Block::Header(level, inlines), rest));
    }
    let (level, text, rest) = header::setext_header(input)?;
    let inlines = crate::inlines::parse_inlines(text, state);
    Some((Block::Header(level, inlines), rest))
}

fn code_block_block(input: &str, state: &mut ParserState) -> Option<(Block, &str)> {
    let (code, rest) = code_block::code_block(input, state.options.tab_stop)?;
    Some((Block::CodeBlock(code), rest))
}

fn hrule_block(input: &str, _state: &mut ParserState) -> Option<(Block, &str)> {
    let rest = hrule::horizontal_rule(input)?;
    Some((Block::HorizontalRule, rest))
}

fn list_block<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    if let Some(result) = list::bullet_list(input, state) {
        return Some(result);
    }
    if let Some(result) = list::ordered_list(input, state) {
        return Some(result);
    }
    list::definition_list(input, state)
}

fn block_quote_block<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    let (interior, rest) = if state.options.strict {
        blockquote::email_blockquote(input)?
    } else if let Some(r) = blockquote::emacs_box_blockquote(input) {
        r
    } else {
        blockquote::email_blockquote(input)?
    };
    let mut sentineled = interior;
    sentineled.push('\n');
    let inner = crate::reentry::parse_from_string(&sentineled, state);
    Some((Block::BlockQuote(inner), rest))
}

fn html_block_block<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    let (text, rest) = html_block::html_block(input, state)?;
    Some((Block::RawHtml(text), rest))
}

/// `\begin{name}...\end{name}` (spec.md §2 row D); there is no dedicated
/// block-level AST variant for raw LaTeX, so it is carried as `RawHtml`
/// like any other verbatim block (see DESIGN.md).
fn raw_latex_environment_block<'a>(
    input: &'a str,
    state: &mut ParserState,
) -> Option<(Block, &'a str)> {
    if state.options.strict {
        return None;
    }
    let (text, rest) = raw::raw_latex_environment(input)?;
    let (line, _) = util::take_line(input);
    if !line.trim_start().starts_with("\\begin{") {
        return None;
    }
    Some((Block::RawHtml(text.to_string()), rest))
}

fn table_block<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    table::table(input, state)
}

fn para_block<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    let (text, rest) = paragraph::paragraph(input, state)?;
    let inlines = crate::inlines::parse_inlines(&text, state);
    Some((Block::Para(inlines), rest))
}

fn plain_block<'a>(input: &'a str, state: &mut ParserState) -> Option<(Block, &'a str)> {
    let (text, rest) = paragraph::plain(input, state)?;
    let inlines = crate::inlines::parse_inlines(&text, state);
    Some((Block::Plain(inlines), rest))
}

type BlockFn = for<'a> fn(&'a str, &mut ParserState) -> Option<(Block, &'a str)>;

const ALTERNATIVES: &[BlockFn] = &[
    header_block,
    table_block,
    code_block_block,
    hrule_block,
    list_block,
    block_quote_block,
    html_block_block,
    raw_latex_environment_block,
    para_block,
    plain_block,
];

/// Parses `input` (already preprocessed: no top-level key/note definitions)
/// into a sequence of blocks, trying each alternative in the fixed
/// disambiguation order at every position and skipping blank-line
/// separators between blocks.
pub fn parse_blocks(mut input: &str, state: &mut ParserState) -> Vec<Block> {
    let mut blocks = Vec::new();
    loop {
        input = skip_blank_lines(input);
        if input.is_empty() {
            break;
        }
        let mut matched = false;
        for alt in ALTERNATIVES {
            if let Some((block, rest)) = try_state(state, |s| alt(input, s)) {
                log::trace!("matched {:?} at offset {}", block, input.len() - rest.len());
                blocks.push(block);
                input = rest;
                matched = true;
                break;
            }
        }
        if !matched {
            // No alternative matched (should not happen once `plain` is
            // reachable): consume one line as `Null` to guarantee progress.
            log::debug!("no block alternative matched, dropping one line as Null");
            let (_line, rest) = util::take_line(input);
            blocks.push(Block::Null);
            input = rest;
        }
    }
    blocks
}
