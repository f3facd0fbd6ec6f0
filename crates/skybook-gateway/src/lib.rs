//! skybook-gateway - API-availability-aware data access
//!
//! This crate provides the [`Gateway`] that front ends call for all flight,
//! booking and account data. It finds a reachable backend among a fixed list
//! of candidates and falls back to an in-memory substitute when none answers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Gateway                            │
//! │                                                              │
//! │   discover() / retry()      dispatch(op)        status()     │
//! │          │                      │                   │        │
//! │          ▼                      ▼                   ▼        │
//! │  ┌───────────────┐      ┌──────────────┐   ┌──────────────┐  │
//! │  │  discovery    │      │ Live?        │   │ Connectivity │  │
//! │  │  (in order)   │─────▶│  ├─ ok ──────┼──▶│ State        │  │
//! │  └───────┬───────┘      │  └─ error ─┐ │   └──────────────┘  │
//! │          │              └────────────┼─┘                     │
//! │          ▼                           ▼                       │
//! │  ┌───────────────┐          ┌───────────────┐                │
//! │  │ HttpTransport │          │  MockBackend  │                │
//! │  │ (reqwest)     │          │  (in-memory)  │                │
//! │  └───────────────┘          └───────────────┘                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use skybook_core::{FlightQuery, Operation};
//! use skybook_gateway::{Gateway, GatewayConfig};
//!
//! # async fn run() -> Result<(), skybook_gateway::ConfigError> {
//! let gateway = Gateway::start(&GatewayConfig::default()).await?;
//! println!("{}", gateway.status());
//!
//! let result = gateway
//!     .dispatch(&Operation::ListFlights(FlightQuery::all()))
//!     .await;
//! if result.is_success() {
//!     // render result.data()
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
mod discovery;
mod gateway;
pub mod mock;
pub mod transport;

pub use config::{ConfigError, GatewayConfig};
pub use gateway::Gateway;
pub use mock::{BookingStore, MockBackend};
pub use transport::{HttpTransport, Transport};

// Re-export core types for convenience
pub use skybook_core::{
    ConnectivityState, DiscoveryResult, DispatchResult, GatewayError, Mode, NetworkOutcome,
    Operation, Payload,
};
