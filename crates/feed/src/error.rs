//! Error types for feed operations.

use thiserror::Error;

/// Errors that can occur while fetching the alert feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse feed payload: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}
