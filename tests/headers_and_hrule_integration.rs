use markdown_reader::ast::{Block, Inline};
use markdown_reader::{read_markdown, ReaderOptions};

#[test]
fn integration_test_atx_header_strips_trailing_hashes() {
    let doc = read_markdown(ReaderOptions::default(), "## Section ##\n").expect("parse failed");
    assert_eq!(doc.blocks[0], Block::Header(2, vec![Inline::Str("Section".to_string())]));
}

#[test]
fn integration_test_setext_level_two_header() {
    let doc = read_markdown(ReaderOptions::default(), "Section\n-------\n").expect("parse failed");
    assert_eq!(doc.blocks[0], Block::Header(2, vec![Inline::Str("Section".to_string())]));
}

#[test]
fn integration_test_atx_header_rejects_ordered_list_marker() {
    let doc = read_markdown(ReaderOptions::default(), "#5 not a header\n").expect("parse failed");
    assert!(!matches!(doc.blocks[0], Block::Header(..)));
}

#[test]
fn integration_test_hrule_variants() {
    for rule in ["---\n", "***\n", "___\n", "- - -\n"] {
        let doc = read_markdown(ReaderOptions::default(), rule).expect("parse failed");
        assert_eq!(doc.blocks, vec![Block::HorizontalRule], "rule {rule:?} did not parse as hrule");
    }
}

#[test]
fn integration_test_paragraph_then_header_then_paragraph() {
    let input = "intro text\n\n# Title\n\nmore text\n";
    let doc = read_markdown(ReaderOptions::default(), input).expect("parse failed");
    assert_eq!(doc.blocks.len(), 3);
    assert!(matches!(doc.blocks[0], Block::Para(_)));
    assert!(matches!(doc.blocks[1], Block::Header(1, _)));
    assert!(matches!(doc.blocks[2], Block::Para(_)));
}
