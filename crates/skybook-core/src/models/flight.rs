//! Flight models

use serde::{Deserialize, Serialize};

/// A scheduled flight as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight identifier
    pub id: i64,
    /// Operating airline
    pub airline: String,
    /// Carrier code and number, e.g. "GA-123"
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    /// Local departure time ("HH:MM")
    pub departure_time: String,
    /// Local arrival time ("HH:MM")
    pub arrival_time: String,
    /// Departure date ("YYYY-MM-DD")
    pub departure_date: String,
    /// Fare in the smallest currency unit
    pub price: i64,
    pub available_seats: u32,
    pub aircraft_type: String,
    /// Human-readable duration, e.g. "2h 30m"
    pub duration: String,
}

/// Search filters for listing flights
///
/// Serialized as query parameters (`?departure=..&arrival=..&date=..&class=..`).
/// Unset filters are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    /// Origin city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
    /// Destination city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    /// Departure date ("YYYY-MM-DD")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Cabin class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl FlightQuery {
    /// A query with no filters
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure = Some(departure.into());
        self.arrival = Some(arrival.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.departure.is_none()
            && self.arrival.is_none()
            && self.date.is_none()
            && self.class.is_none()
    }
}
