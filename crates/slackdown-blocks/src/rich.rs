//! Rich-text elements.
//!
//! A rich-text block owns a flat sequence of elements: sections of leaf
//! parts, and list nodes that carry their nesting depth as an `indent`
//! integer instead of containing each other. Style is a set of boolean
//! flags on a text leaf rather than inline markup syntax.

use serde::Serialize;

/// An element of a rich-text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextElement {
    /// An ordered run of leaf parts.
    RichTextSection { elements: Vec<RichTextPart> },
    /// One flattened list item. `elements` always holds exactly one
    /// section; hierarchy lives in `indent`, not in nesting.
    RichTextList {
        style: ListStyle,
        indent: usize,
        border: u32,
        elements: Vec<RichTextElement>,
    },
}

impl RichTextElement {
    /// Build a section from leaf parts.
    pub fn section(elements: Vec<RichTextPart>) -> Self {
        RichTextElement::RichTextSection { elements }
    }

    /// Build a list node wrapping a single section.
    pub fn list(style: ListStyle, indent: usize, section: RichTextElement) -> Self {
        RichTextElement::RichTextList {
            style,
            indent,
            border: 0,
            elements: vec![section],
        }
    }
}

/// List marker style for a rich-text list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Numbered markers.
    Ordered,
    /// Bullet markers.
    Bullet,
}

impl std::fmt::Display for ListStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListStyle::Ordered => write!(f, "ordered"),
            ListStyle::Bullet => write!(f, "bullet"),
        }
    }
}

/// A leaf of a rich-text section: styled text or a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RichTextPart {
    /// Raw text with independent style flags. The style object is omitted
    /// from JSON when no flag is set.
    Text {
        text: String,
        #[serde(skip_serializing_if = "RichTextStyle::is_plain")]
        style: RichTextStyle,
    },
    /// A hyperlink with its display text.
    Link { url: String, text: String },
}

impl RichTextPart {
    /// An unstyled text leaf.
    pub fn plain(text: impl Into<String>) -> Self {
        RichTextPart::Text {
            text: text.into(),
            style: RichTextStyle::default(),
        }
    }

    /// A text leaf with the given style flags.
    pub fn styled(text: impl Into<String>, style: RichTextStyle) -> Self {
        RichTextPart::Text {
            text: text.into(),
            style,
        }
    }

    /// A link leaf.
    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        RichTextPart::Link {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Independent boolean style flags for a text leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RichTextStyle {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strike: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,
}

impl RichTextStyle {
    /// Bold only.
    pub const BOLD: Self = Self::flag(true, false, false, false);
    /// Italic only.
    pub const ITALIC: Self = Self::flag(false, true, false, false);
    /// Strikethrough only.
    pub const STRIKE: Self = Self::flag(false, false, true, false);
    /// Inline code only.
    pub const CODE: Self = Self::flag(false, false, false, true);

    const fn flag(bold: bool, italic: bool, strike: bool, code: bool) -> Self {
        Self {
            bold,
            italic,
            strike,
            code,
        }
    }

    /// `true` when no flag is set.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strike || self.code)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
