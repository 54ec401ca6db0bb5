//! Error types for conversion client operations

use thiserror::Error;

/// Result type alias for conversion client operations
pub type Result<T> = std::result::Result<T, ConvertClientError>;

/// Errors that can occur during conversion client operations
#[derive(Error, Debug)]
pub enum ConvertClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server rejected the conversion with an error message
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ConvertClientError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }
}
