//! Error taxonomy shared by the gateway and its front ends

use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur while resolving a logical operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Backend did not respond in time or the request failed
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    /// Entity is absent (e.g. unknown flight id)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed response body or configuration value
    #[error("Invalid data: {0}")]
    Invalid(String),

    /// Operation or endpoint not recognized by the substitute
    #[error("Endpoint not supported: {0}")]
    Unsupported(String),
}

impl GatewayError {
    /// Short machine-readable kind, used in structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Unreachable(_) => "unreachable",
            GatewayError::NotFound(_) => "not_found",
            GatewayError::Invalid(_) => "invalid",
            GatewayError::Unsupported(_) => "unsupported",
        }
    }

    /// Returns the HTTP status code a server would use for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Unreachable(_) => 503,
            GatewayError::NotFound(_) => 404,
            GatewayError::Invalid(_) => 502,
            GatewayError::Unsupported(_) => 501,
        }
    }
}
