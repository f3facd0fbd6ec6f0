//! SkyBook Client Library
//!
//! Provides a typed HTTP client for talking to a SkyBook booking backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use skybook_client::SkybookClient;
//! use skybook_core::FlightQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SkybookClient::new("http://localhost:3001")?;
//!
//!     let flights = client.list_flights(&FlightQuery::all()).await?;
//!     let flight = client.get_flight(flights[0].id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module runs an axum router on an ephemeral port:
//!
//! ```rust,ignore
//! use skybook_client::testing::TestServer;
//!
//! let server = TestServer::start(router).await?;
//! let flights = server.client.list_flights(&FlightQuery::all()).await?;
//! ```

mod client;
mod error;
pub mod testing;
mod types;

pub use client::SkybookClient;
pub use error::{Result, SkybookClientError};
pub use types::ErrorResponse;

// Re-export core types for convenience
pub use skybook_core::{AuthSession, Booking, Flight, FlightQuery, RegistrationReceipt};
