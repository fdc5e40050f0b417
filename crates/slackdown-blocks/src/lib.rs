//! Slackdown Blocks
//!
//! This crate provides the output data model for the slackdown converter:
//! Slack Block Kit block variants, rich-text elements, and the constructors
//! that apply the documented field caps.
//!
//! # Overview
//!
//! - [`Block`] - The output block union (`section`, `divider`, `header`,
//!   `image`, `rich_text`)
//! - [`RichTextElement`], [`RichTextPart`], [`RichTextStyle`] - The
//!   structured rich-text encoding
//! - [`section`], [`divider`], [`header`], [`image`], [`rich_text`] -
//!   Length-capping constructors
//!
//! Everything serializes directly to the message API's JSON envelope:
//!
//! ```
//! use slackdown_blocks::section;
//!
//! let json = serde_json::to_string(&section("*hello*")).unwrap();
//! assert!(json.contains(r#""type":"section""#));
//! ```

pub mod block;
pub mod rich;

pub use block::{
    divider, header, image, rich_text, section, truncate, Block, MrkdwnText, PlainText,
    MAX_HEADER_LENGTH, MAX_IMAGE_ALT_TEXT_LENGTH, MAX_IMAGE_TITLE_LENGTH, MAX_TEXT_LENGTH,
};
pub use rich::{ListStyle, RichTextElement, RichTextPart, RichTextStyle};
