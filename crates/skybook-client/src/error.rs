//! Error types for SkyBook client operations

use thiserror::Error;

/// Result type alias for SkyBook client operations
pub type Result<T> = std::result::Result<T, SkybookClientError>;

/// Errors that can occur during SkyBook client operations
#[derive(Error, Debug)]
pub enum SkybookClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Server returned an error response
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl SkybookClientError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// True when the request hit a deadline rather than failing outright
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout => true,
            Self::HttpError(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// True when the server answered with a body that could not be decoded
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::ParseError(_) => true,
            Self::HttpError(e) => e.is_decode(),
            _ => false,
        }
    }
}
