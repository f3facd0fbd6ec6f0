//! Command implementations for skybook

pub mod auth;
pub mod bookings;
pub mod flights;
pub mod status;
pub mod summary;

pub use auth::{login, register};
pub use bookings::{book, bookings};
pub use flights::{flight, flights};
pub use status::status;
pub use summary::summary;

use anyhow::{anyhow, Result};
use skybook_core::{DispatchResult, Payload};

/// Unwrap a dispatch result, turning a failure into an error
fn expect_payload(result: DispatchResult) -> Result<Payload> {
    result.into_result().map_err(|e| anyhow!(e))
}

/// Error for a payload that does not match the requested operation
fn unexpected(expected: &str) -> anyhow::Error {
    anyhow!("Unexpected response: expected {}", expected)
}
