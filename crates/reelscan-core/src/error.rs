//! Error types for Reelscan Core

use thiserror::Error;

/// Result type alias for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Manifest fetch/analysis error types
#[derive(Error, Debug)]
pub enum Error {
    // Network errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Manifest request failed: {url} returned {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    // Input errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns true if retrying the request could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Network(e) => e.is_timeout() || e.is_connect(),
            Error::HttpStatus { status, .. } => status.is_server_error(),
            Error::InvalidUrl(_) => false,
        }
    }
}
