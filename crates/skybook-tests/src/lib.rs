//! End-to-end tests for the SkyBook gateway
//!
//! These tests run a real [`Gateway`](skybook_gateway::Gateway) with its HTTP
//! transport against small axum backends started in-process:
//! - discovery across reachable and refused candidates
//! - live dispatch and per-request fallback
//! - manual retry bringing a backend up after startup
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p skybook-tests
//! ```
//!
//! # Test Structure
//!
//! - `gateway_e2e_test.rs` - Gateway over HTTP against fake backends

// This crate only contains tests, no library code
