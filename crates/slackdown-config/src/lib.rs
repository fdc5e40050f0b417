//! Slackdown Config
//!
//! This crate holds the options surface for the converter. Options are
//! plain values passed per call; the serializable subset can also be loaded
//! from TOML, e.g. for a CLI `--config` flag:
//!
//! ```
//! use slackdown_config::ParseOptions;
//!
//! let options = ParseOptions::from_toml_str(r#"
//!     use_rich_text = false
//!
//!     [lists]
//!     use_rich_text = true
//! "#).unwrap();
//! assert!(options.rich_text_lists());
//! ```
//!
//! The checkbox-prefix callback is code, not data, so it is excluded from
//! the TOML subset and set programmatically.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use slackdown_core::{Result, SlackdownError};

/// Callback producing the line prefix for a checkbox list item.
///
/// The callback fully controls its output; no bullet is added around it.
pub type CheckboxPrefix = Arc<dyn Fn(bool) -> String + Send + Sync>;

/// Options for one conversion call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Render paragraph and list content as rich-text blocks instead of
    /// mrkdwn sections.
    pub use_rich_text: bool,
    /// List-specific options.
    pub lists: ListOptions,
}

/// Options controlling list rendering.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    /// Render lists as rich-text blocks even when the global flag is off.
    pub use_rich_text: bool,
    /// Prefix for checkbox items. Defaults to a plain bullet when unset.
    #[serde(skip)]
    pub checkbox_prefix: Option<CheckboxPrefix>,
}

impl ParseOptions {
    /// Effective rich-text mode for lists: the global flag forces it on,
    /// the list-level flag can only add, never remove.
    pub fn rich_text_lists(&self) -> bool {
        self.use_rich_text || self.lists.use_rich_text
    }

    /// Load the serializable subset from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| SlackdownError::Config(format!("invalid options: {e}")))
    }
}

impl fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListOptions")
            .field("use_rich_text", &self.use_rich_text)
            .field(
                "checkbox_prefix",
                &self.checkbox_prefix.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}
