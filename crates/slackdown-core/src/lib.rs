//! Slackdown Core
//!
//! This crate provides the input data model and error definitions for the
//! slackdown markdown-to-blocks converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Token`] - One node of the externally tokenized document tree
//! - [`List`], [`ListItem`], [`Table`], [`TableCell`] - Container payloads
//! - [`SlackdownError`] - Error types
//!
//! The converter treats the token tree as read-only input; nothing here
//! re-tokenizes or validates it.

pub mod error;
pub mod token;

pub use error::{Result, SlackdownError};
pub use token::{List, ListItem, Table, TableCell, Token};
