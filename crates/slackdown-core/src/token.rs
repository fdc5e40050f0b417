//! Input token tree for slackdown.
//!
//! A [`Token`] is one node of the document tree produced by a markdown
//! tokenizer. Block-level kinds (headings, paragraphs, lists, tables,
//! blockquotes, code, thematic breaks, raw HTML) and phrasing-level kinds
//! (text, styles, links, images, breaks) share a single closed enum, so a
//! consumer can match any node without caring which level it came from.
//!
//! The tree is read-only input: the converter never mutates it, and nothing
//! here validates it. Serde derives use a `type` tag so externally produced
//! JSON token trees deserialize directly.

use serde::{Deserialize, Serialize};

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Token {
    /// Heading with level 1-6 and phrasing children.
    Heading { level: u8, tokens: Vec<Token> },
    /// Paragraph of phrasing children.
    Paragraph { tokens: Vec<Token> },
    /// Fenced or indented code block, body verbatim.
    Code {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    /// Blockquote owning nested block children.
    Blockquote { tokens: Vec<Token> },
    /// Ordered or unordered list.
    List(List),
    /// Table with one header row and zero or more body rows.
    Table(Table),
    /// Thematic break (horizontal rule).
    ThematicBreak,
    /// Raw block-level HTML fragment.
    Html { raw: String },

    /// Plain text run.
    Text { text: String },
    /// Bold span with phrasing children.
    Strong { tokens: Vec<Token> },
    /// Italic span with phrasing children.
    Emphasis { tokens: Vec<Token> },
    /// Struck-through span with phrasing children.
    Strikethrough { tokens: Vec<Token> },
    /// Inline code span.
    Codespan { text: String },
    /// Link with destination and phrasing children as the label.
    Link {
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        tokens: Vec<Token>,
    },
    /// Inline image; `text` is the alt text.
    Image {
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        text: String,
    },
    /// Hard line break.
    #[serde(rename = "linebreak")]
    LineBreak,
    /// Raw inline HTML fragment.
    #[serde(rename = "rawHTML")]
    RawHtml { raw: String },
}

/// An ordered or unordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// `true` for `1.`-style lists, `false` for bullets.
    pub ordered: bool,
    /// The list items, in document order.
    pub items: Vec<ListItem>,
}

/// One list item.
///
/// Items own mixed children: phrasing tokens for tight items, `Paragraph`
/// tokens for loose ones, and nested `List` tokens for sublists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Tri-state checkbox: `None` when the item carries no checkbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Child tokens, in document order.
    pub tokens: Vec<Token>,
}

/// A table: header row plus body rows of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header row cells.
    pub header: Vec<TableCell>,
    /// Body rows, each a row of cells.
    pub rows: Vec<Vec<TableCell>>,
}

/// One table cell of phrasing children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Phrasing children of the cell.
    pub tokens: Vec<Token>,
}

impl Token {
    /// Convenience constructor for a plain text token.
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text { text: text.into() }
    }
}
