//! Admin dashboard summary

use serde::{Deserialize, Serialize};

use super::{Booking, BookingStatus, Flight};

/// Headline counts for the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_flights: usize,
    pub total_bookings: usize,
    /// Bookings currently confirmed
    pub active_bookings: usize,
}

impl DashboardSummary {
    pub fn from_records(flights: &[Flight], bookings: &[Booking]) -> Self {
        Self {
            total_flights: flights.len(),
            total_bookings: bookings.len(),
            active_bookings: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Confirmed)
                .count(),
        }
    }
}
