//! Error types for slackdown

use thiserror::Error;

/// Main error type for slackdown operations
#[derive(Error, Debug)]
pub enum SlackdownError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Markup parse error while extracting images from raw HTML
    #[error("Markup error: {0}")]
    Markup(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for slackdown operations
pub type Result<T> = std::result::Result<T, SlackdownError>;
