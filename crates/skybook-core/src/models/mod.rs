//! Shared data models for the SkyBook gateway

mod auth;
mod booking;
mod connectivity;
mod dashboard;
mod flight;

pub use auth::*;
pub use booking::*;
pub use connectivity::*;
pub use dashboard::*;
pub use flight::*;
