// Markdown reader library — backtracking recursive-descent parser producing
// a Pandoc-style document tree.

pub mod ast;
pub mod blocks;
pub mod config;
pub mod inlines;
pub mod normalize;
pub mod preprocess;
pub mod raw;
pub mod reentry;
pub mod runtime;
pub mod state;
pub mod title;

pub use ast::Pandoc;
pub use config::ReaderOptions;

/// Entry point (spec.md §6 `readMarkdown`). Appends the `"\n\n"` sentinel,
/// parses an optional title block (component G), runs the three-pass
/// preprocessor (component C) to populate the key/note tables, then parses
/// the residual input as blocks (component D).
pub fn read_markdown(options: ReaderOptions, source: &str) -> anyhow::Result<ast::Pandoc> {
    log::debug!("read_markdown: {} bytes, strict={}", source.len(), options.strict);
    let mut state = state::ParserState::new(options);
    let (meta, after_title) = title::title_block(source, &mut state);
    let residual = preprocess::run(after_title, &mut state);
    let blocks = blocks::parse_blocks(&residual, &mut state);
    log::debug!("read_markdown: produced {} top-level blocks", blocks.len());
    Ok(ast::Pandoc { meta, blocks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Inline};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn empty_input_is_empty_document() {
        init_logging();
        let doc = read_markdown(ReaderOptions::default(), "").unwrap();
        assert_eq!(doc.meta, ast::Meta::default());
        assert_eq!(doc.blocks, Vec::new());
    }

    #[test]
    fn single_newline_is_empty_document() {
        let doc = read_markdown(ReaderOptions::default(), "\n").unwrap();
        assert_eq!(doc.blocks, Vec::new());
    }

    #[test]
    fn s1_atx_header() {
        let doc = read_markdown(ReaderOptions::default(), "# Hi\n").unwrap();
        assert_eq!(doc.blocks, vec![Block::Header(1, vec![Inline::Str("Hi".to_string())])]);
    }

    #[test]
    fn s2_setext_header() {
        let doc = read_markdown(ReaderOptions::default(), "Hi\n==\n").unwrap();
        assert_eq!(doc.blocks, vec![Block::Header(1, vec![Inline::Str("Hi".to_string())])]);
    }

    #[test]
    fn s3_horizontal_rule() {
        let doc = read_markdown(ReaderOptions::default(), "---\n").unwrap();
        assert_eq!(doc.blocks, vec![Block::HorizontalRule]);
    }

    #[test]
    fn s4_reference_link() {
        let doc = read_markdown(ReaderOptions::default(), "[a]: http://x \"t\"\n\n[a]\n").unwrap();
        assert_eq!(
            doc.blocks,
            vec![Block::Para(vec![Inline::Link(
                vec![Inline::Str("a".to_string())],
                ("http://x".to_string(), "t".to_string())
            )])]
        );
    }

    #[test]
    fn s5_ordered_list() {
        let doc = read_markdown(ReaderOptions::default(), "1. a\n2. b\n").unwrap();
        match &doc.blocks[0] {
            Block::OrderedList((start, style, delim), items) => {
                assert_eq!(*start, 1);
                assert_eq!(*style, ast::ListNumberStyle::Decimal);
                assert_eq!(*delim, ast::ListNumberDelim::Period);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected ordered list, got {other:?}"),
        }
    }

    #[test]
    fn s6_simple_table() {
        // Alignment per cell follows spec.md §4.F's (L,R) mapping applied to
        // the header text under each dash run; for this evenly centered
        // header every column reads (spaceBefore, spaceAfter) = Center, see
        // DESIGN.md's Open Question note on the table alignment example.
        init_logging();
        let doc =
            read_markdown(ReaderOptions::default(), " a    b    c\n --- --- ---\n 1   2   3\n\n")
                .unwrap();
        assert_eq!(doc.blocks.len(), 1);
        match &doc.blocks[0] {
            Block::Table { caption, aligns, headers, rows, .. } => {
                assert!(caption.is_empty());
                assert_eq!(aligns, &[ast::Alignment::Center; 3]);
                assert_eq!(
                    headers,
                    &vec![
                        vec![Inline::Str("a".to_string())],
                        vec![Inline::Str("b".to_string())],
                        vec![Inline::Str("c".to_string())],
                    ]
                );
                assert_eq!(
                    rows,
                    &vec![vec![
                        vec![Inline::Str("1".to_string())],
                        vec![Inline::Str("2".to_string())],
                        vec![Inline::Str("3".to_string())],
                    ]]
                );
            }
            other => panic!("expected a single table block, got {other:?}"),
        }
    }

    #[test]
    fn s7_emphasis_and_strong() {
        init_logging();
        let doc = read_markdown(ReaderOptions::default(), "*em* and **strong**\n").unwrap();
        assert_eq!(
            doc.blocks,
            vec![Block::Para(vec![
                Inline::Emph(vec![Inline::Str("em".to_string())]),
                Inline::Space,
                Inline::Str("and".to_string()),
                Inline::Space,
                Inline::Strong(vec![Inline::Str("strong".to_string())]),
            ])]
        );
    }

    #[test]
    fn s8_footnote() {
        let doc =
            read_markdown(ReaderOptions::default(), "Here[^1] is.\n\n[^1]: footnote body.\n").unwrap();
        assert_eq!(
            doc.blocks,
            vec![Block::Para(vec![
                Inline::Str("Here".to_string()),
                Inline::Note(vec![Block::Para(vec![
                    Inline::Str("footnote".to_string()),
                    Inline::Space,
                    Inline::Str("body.".to_string()),
                ])]),
                Inline::Space,
                Inline::Str("is.".to_string()),
            ])]
        );
    }
}
