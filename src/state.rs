//! Mutable parser state (spec.md §3 "Parser state `S`"), threaded by
//! reference through every production. Kept value-semantic (cheap clone)
//! per spec.md §9 Design Notes: after preprocessing, `keys`/`notes` are
//! fixed, so a speculative `try_`/`look_ahead` only needs to snapshot the
//! small scalar fields below, never the tables.

use std::collections::BTreeMap;

use crate::ast::Block;
use crate::config::ReaderOptions;

/// Prevents nested same-kind smart quotes (`"a "b" c"` never opens a second
/// double quote while the first is still open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteContext {
    #[default]
    None,
    InSingle,
    InDouble,
}

/// Causes `endline` to treat a fresh list marker as a structural break
/// rather than a soft break, when parsing inside a list item's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserContext {
    #[default]
    NullState,
    ListItemState,
}

#[derive(Debug, Clone)]
pub struct ParserState {
    pub options: ReaderOptions,
    pub quote_context: QuoteContext,
    pub parser_context: ParserContext,
    /// label (normalized) -> (url, title)
    pub keys: BTreeMap<String, (String, String)>,
    /// note id -> parsed body, installed after preprocessing pass 2 and
    /// re-parsed lazily the first time a `Note` inline resolves it (spec.md
    /// §9 "Cyclic-looking definitions").
    pub notes: BTreeMap<String, Vec<Block>>,
}

/// Snapshot of the scalar (non-table) fields, restored by `try_`/`look_ahead`
/// on backtrack. Tables are never touched by a speculative parse once
/// preprocessing has finished (see module docs).
#[derive(Debug, Clone, Copy)]
pub struct StateSnapshot {
    quote_context: QuoteContext,
    parser_context: ParserContext,
}

impl ParserState {
    pub fn new(options: ReaderOptions) -> Self {
        Self {
            options,
            quote_context: QuoteContext::None,
            parser_context: ParserContext::NullState,
            keys: BTreeMap::new(),
            notes: BTreeMap::new(),
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            quote_context: self.quote_context,
            parser_context: self.parser_context,
        }
    }

    pub fn restore(&mut self, snap: StateSnapshot) {
        self.quote_context = snap.quote_context;
        self.parser_context = snap.parser_context;
    }

    /// Look up a reference label, matching case-insensitively after
    /// whitespace/Unicode normalization (spec.md §3 invariant).
    pub fn lookup_key(&self, label: &[crate::ast::Inline]) -> Option<(String, String)> {
        let key = crate::normalize::normalize_label(label);
        self.keys.get(&key).cloned()
    }
}
