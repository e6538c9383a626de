//! Re-entry bridge (spec.md §4.H `parseFromString`). Runs the block parser
//! against a captured text fragment with a fresh cursor but the same
//! mutable `ParserState`, so key/note tables and quote context propagate
//! out of list items, block quotes and footnote bodies.

use crate::ast::Block;
use crate::state::{ParserContext, ParserState};

/// Re-parses `text` as a block sequence, sharing `state` with the caller.
/// Used for block-quote and footnote bodies, which do not install
/// `ListItemState`.
pub fn parse_from_string(text: &str, state: &mut ParserState) -> Vec<Block> {
    crate::blocks::parse_blocks(text, state)
}

/// Like `parse_from_string`, but installs `ParserContext::ListItemState`
/// for the duration of the call (spec.md §4.D: makes `endline` treat a
/// fresh top-level list marker as a structural break) and restores the
/// prior context on exit, even though this call itself never backtracks.
pub fn parse_in_list_item(text: &str, state: &mut ParserState) -> Vec<Block> {
    let previous = state.parser_context;
    state.parser_context = ParserContext::ListItemState;
    let blocks = crate::blocks::parse_blocks(text, state);
    state.parser_context = previous;
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    #[test]
    fn list_item_context_is_restored() {
        let mut state = ParserState::new(ReaderOptions::default());
        let blocks = parse_in_list_item("a paragraph\n\n", &mut state);
        assert_eq!(blocks.len(), 1);
        assert_eq!(state.parser_context, ParserContext::NullState);
    }
}
