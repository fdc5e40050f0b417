//! Slackdown - Convert markdown into Slack Block Kit blocks.
//!
//! Give it markdown text (or an already-tokenized document tree) and it
//! produces an ordered sequence of blocks ready to serialize into a chat
//! message payload: mrkdwn sections, headers, dividers, images, and
//! rich-text blocks.
//!
//! # Example
//!
//! ```
//! use slackdown::{markdown_to_blocks, ParseOptions};
//!
//! let blocks = markdown_to_blocks("# Hello\n\nSome *markdown*.", &ParseOptions::default())
//!     .unwrap();
//! assert_eq!(blocks.len(), 2);
//! ```
//!
//! To drive the converter from your own tokenizer, build the
//! [`Token`] tree directly and call [`parse_blocks`].

pub use slackdown_blocks::{
    divider, header, image, rich_text, section, Block, ListStyle, MrkdwnText, PlainText,
    RichTextElement, RichTextPart, RichTextStyle,
};
pub use slackdown_config::{CheckboxPrefix, ListOptions, ParseOptions};
pub use slackdown_core::{List, ListItem, Result, SlackdownError, Table, TableCell, Token};
pub use slackdown_parser::tokenize;
pub use slackdown_render::{parse_blocks, parse_token};

/// Convert a markdown document straight to blocks.
pub fn markdown_to_blocks(markdown: &str, options: &ParseOptions) -> Result<Vec<Block>> {
    parse_blocks(&tokenize(markdown), options)
}
