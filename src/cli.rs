//! Command-line interface for slackdown.
//!
//! Converts markdown from files or stdin and prints the resulting block
//! sequence as the JSON `blocks` array a chat message payload expects.

use clap::Parser;
use std::path::{Path, PathBuf};

use slackdown::{ParseOptions, Result};

/// Slackdown - Convert markdown into Slack Block Kit blocks.
#[derive(Parser, Debug)]
#[command(
    name = "sldn",
    version,
    about = "Convert markdown into Slack Block Kit blocks",
    after_help = "Examples:\n  \
                  cat README.md | sldn\n  \
                  sldn --rich-text notes.md\n  \
                  sldn -c options.toml --compact changelog.md"
)]
pub struct Cli {
    /// Input files to convert (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Render paragraphs and lists as rich text instead of mrkdwn
    #[arg(long = "rich-text")]
    pub rich_text: bool,

    /// Render only lists as rich text
    #[arg(long = "rich-text-lists")]
    pub rich_text_lists: bool,

    /// Conversion options as a TOML file path or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long = "compact")]
    pub compact: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Resolve the effective conversion options.
    ///
    /// `--config` accepts a path to a TOML file or inline TOML; the
    /// `--rich-text*` flags then layer on top of whatever it sets.
    pub fn parse_options(&self) -> Result<ParseOptions> {
        let mut options = match &self.config {
            Some(value) => {
                let path = Path::new(value);
                if path.exists() {
                    ParseOptions::from_toml_str(&std::fs::read_to_string(path)?)?
                } else {
                    ParseOptions::from_toml_str(value)?
                }
            }
            None => ParseOptions::default(),
        };

        if self.rich_text {
            options.use_rich_text = true;
        }
        if self.rich_text_lists {
            options.lists.use_rich_text = true;
        }
        Ok(options)
    }
}
