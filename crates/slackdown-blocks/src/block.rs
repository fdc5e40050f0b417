//! Top-level block variants and their constructors.
//!
//! Each constructor applies the Block Kit field cap for its variant and
//! nothing else; callers are trusted for everything the caps don't cover.

use serde::Serialize;

use crate::rich::RichTextElement;

/// Maximum length of a section's mrkdwn text.
pub const MAX_TEXT_LENGTH: usize = 3000;
/// Maximum length of a header's plain text.
pub const MAX_HEADER_LENGTH: usize = 150;
/// Maximum length of an image title.
pub const MAX_IMAGE_TITLE_LENGTH: usize = 2000;
/// Maximum length of an image's alt text.
pub const MAX_IMAGE_ALT_TEXT_LENGTH: usize = 2000;

/// One output block, serialized as its Block Kit JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section of mrkdwn text.
    Section {
        text: MrkdwnText,
        /// Ask the client to render the section unclipped. Not yet in every
        /// published schema, but accepted by the message API.
        expand: bool,
    },
    /// Divider with no payload.
    Divider,
    /// Plain-text header.
    Header { text: PlainText },
    /// Standalone image.
    Image {
        image_url: String,
        alt_text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<PlainText>,
    },
    /// Rich-text block of sections and flattened list nodes.
    RichText { elements: Vec<RichTextElement> },
}

/// A `{"type": "mrkdwn", "text": …}` composition object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "mrkdwn")]
pub struct MrkdwnText {
    pub text: String,
}

/// A `{"type": "plain_text", "text": …}` composition object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "plain_text")]
pub struct PlainText {
    pub text: String,
}

/// Build a section block, capping the text at [`MAX_TEXT_LENGTH`].
pub fn section(text: &str) -> Block {
    Block::Section {
        text: MrkdwnText {
            text: truncate(text, MAX_TEXT_LENGTH),
        },
        expand: true,
    }
}

/// Build a divider block.
pub fn divider() -> Block {
    Block::Divider
}

/// Build a header block, capping the text at [`MAX_HEADER_LENGTH`].
pub fn header(text: &str) -> Block {
    Block::Header {
        text: PlainText {
            text: truncate(text, MAX_HEADER_LENGTH),
        },
    }
}

/// Build an image block, capping alt text and title at their limits.
pub fn image(url: &str, alt_text: &str, title: Option<&str>) -> Block {
    Block::Image {
        image_url: url.to_string(),
        alt_text: truncate(alt_text, MAX_IMAGE_ALT_TEXT_LENGTH),
        title: title.map(|t| PlainText {
            text: truncate(t, MAX_IMAGE_TITLE_LENGTH),
        }),
    }
}

/// Build a rich-text block from already-assembled elements.
pub fn rich_text(elements: Vec<RichTextElement>) -> Block {
    Block::RichText { elements }
}

/// Truncate to at most `max_chars` characters, on a char boundary.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}
