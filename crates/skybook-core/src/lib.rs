//! skybook-core - Core types for the SkyBook data access gateway
//!
//! This crate holds everything the gateway, the HTTP client and the front
//! ends agree on: the flight and booking records, the logical operations a
//! consumer can dispatch, the error taxonomy and the two-tier result types.

pub mod error;
pub mod models;
pub mod operation;
pub mod result;

pub use error::{GatewayError, GatewayResult};
pub use models::*;
pub use operation::{Method, Operation};
pub use result::{DispatchResult, NetworkOutcome, Payload};
