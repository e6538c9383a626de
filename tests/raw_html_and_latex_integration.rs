use markdown_reader::ast::{Block, Inline};
use markdown_reader::{read_markdown, ReaderOptions};

#[test]
fn integration_test_html_block_element_is_raw_html() {
    let input = "<div>\nhello\n</div>\n\nafter\n";
    let doc = read_markdown(ReaderOptions::default(), input).expect("parse failed");
    match &doc.blocks[0] {
        Block::RawHtml(text) => assert!(text.contains("hello")),
        other => panic!("expected a raw html block, got {other:?}"),
    }
    assert!(matches!(doc.blocks.last(), Some(Block::Para(_))));
}

#[test]
fn integration_test_html_comment_block() {
    let input = "<!-- a note -->\n\nBody\n";
    let doc = read_markdown(ReaderOptions::default(), input).expect("parse failed");
    assert!(matches!(doc.blocks[0], Block::RawHtml(_)));
}

#[test]
fn integration_test_strict_mode_rejects_non_block_tag_and_falls_back_to_paragraph() {
    let mut options = ReaderOptions::default();
    options.strict = true;
    let input = "<span>inline-only tag</span>\n\n";
    let doc = read_markdown(options, input).expect("parse failed");
    assert!(!matches!(doc.blocks[0], Block::RawHtml(_)));
}

#[test]
fn integration_test_raw_latex_environment_is_preserved() {
    let input = "\\begin{equation}\nx = y\n\\end{equation}\n\nafter\n";
    let doc = read_markdown(ReaderOptions::default(), input).expect("parse failed");
    match &doc.blocks[0] {
        Block::RawHtml(text) => {
            assert!(text.starts_with("\\begin{equation}"));
            assert!(text.ends_with("\\end{equation}"));
        }
        other => panic!("expected a raw latex environment block, got {other:?}"),
    }
}

#[test]
fn integration_test_raw_latex_inline_fragment() {
    let input = "Inline \\textbf{bold} text.\n";
    let doc = read_markdown(ReaderOptions::default(), input).expect("parse failed");
    match &doc.blocks[0] {
        Block::Para(inlines) => {
            assert!(inlines
                .iter()
                .any(|i| matches!(i, Inline::TeX(t) if t == "\\textbf{bold}")));
        }
        other => panic!("expected paragraph, got {other:?}"),
    }
}
