//! Error types for the job feed viewer
//!
//! - `FeedError`: fetching or decoding the remote feed
//! - `ConfigError`: invalid environment configuration
//!
//! Neither is ever shown on the page. The renderer collapses every
//! `FeedError` into the generic unavailable message and logs the detail.

use thiserror::Error;

/// Feed source errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Feed has jobs but no meta block")]
    MissingMeta,
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Deserialization(e.to_string())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid UTC offset: {0} (expected +HH:MM, -HH:MM or Z)")]
    InvalidOffset(String),

    #[error("Invalid format string in {var}: {value}")]
    InvalidFormat { var: &'static str, value: String },
}
