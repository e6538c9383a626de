//! Read-only parser configuration (spec.md §9 "Global config"). Built once
//! by the caller, passed by reference through the whole parse.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReaderOptions {
    /// Effective width of a tab stop, in columns. Pandoc's default is 4.
    pub tab_stop: usize,
    /// Terminal/output width budget used to compute table column widths.
    pub columns: usize,
    /// Strict mode disables Pandoc's Markdown extensions (math, extended
    /// ordered-list markers, emacs-box quotes, definition lists, ...).
    pub strict: bool,
    /// Smart typography: curly quotes, em/en dashes, ellipses.
    pub smart: bool,
    /// Whether raw HTML/LaTeX fragments are preserved verbatim in the tree
    /// (`RawHtml`/`TeX`) rather than dropped.
    pub parse_raw: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            tab_stop: 4,
            columns: 80,
            strict: false,
            smart: true,
            parse_raw: true,
        }
    }
}
