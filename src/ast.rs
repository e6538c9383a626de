//! Document tree produced by the reader. Closed tagged unions, matched
//! exhaustively by anything downstream of `read_markdown`.

use serde::{Deserialize, Serialize};

/// Root of a parsed document: metadata plus the top-level block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pandoc {
    pub meta: Meta,
    pub blocks: Vec<Block>,
}

/// Title-block metadata (spec.md §4.G). Per spec.md §6, `authors` is a list
/// of inline-free author strings (character references decoded, no further
/// inline parsing); `date` is likewise a single decoded string, never parsed
/// into a calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub title: Vec<Inline>,
    pub authors: Vec<String>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Plain(Vec<Inline>),
    Para(Vec<Inline>),
    Header(u8, Vec<Inline>),
    CodeBlock(String),
    BlockQuote(Vec<Block>),
    BulletList(Vec<Vec<Block>>),
    OrderedList((u32, ListNumberStyle, ListNumberDelim), Vec<Vec<Block>>),
    DefinitionList(Vec<(Vec<Inline>, Vec<Block>)>),
    HorizontalRule,
    Table {
        caption: Vec<Inline>,
        aligns: Vec<Alignment>,
        widths: Vec<f64>,
        headers: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    RawHtml(String),
    Null,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Str(String),
    Emph(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikeout(Vec<Inline>),
    Superscript(Vec<Inline>),
    Subscript(Vec<Inline>),
    Quoted(QuoteType, Vec<Inline>),
    Code(String),
    Space,
    EmDash,
    EnDash,
    Ellipses,
    Apostrophe,
    LineBreak,
    Math(String),
    TeX(String),
    HtmlInline(String),
    Link(Vec<Inline>, (String, String)),
    Image(Vec<Inline>, (String, String)),
    Note(Vec<Block>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteType {
    SingleQuote,
    DoubleQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Right,
    Center,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListNumberStyle {
    DefaultStyle,
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListNumberDelim {
    DefaultDelim,
    Period,
    OneParen,
    TwoParens,
}
