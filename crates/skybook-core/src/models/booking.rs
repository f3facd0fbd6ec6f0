//! Booking models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Flight;

/// Fixed service fee added to every fare, in the smallest currency unit
pub const SERVICE_FEE: i64 = 150_000;

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "pending" => Ok(BookingStatus::Pending),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("Unknown booking status: {}", other)),
        }
    }
}

/// A booking record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking code, e.g. "BK001"
    pub id: String,
    pub flight_id: i64,
    pub passenger_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_phone: Option<String>,
    pub seat_number: String,
    /// Date the booking was made ("YYYY-MM-DD")
    pub booking_date: String,
    pub status: BookingStatus,
    /// Fare plus fees in the smallest currency unit
    pub total_price: i64,
}

impl Booking {
    /// Stamp a new booking request as a confirmed booking
    pub fn confirmed(
        id: impl Into<String>,
        request: NewBooking,
        booking_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            flight_id: request.flight_id,
            passenger_name: request.passenger_name,
            passenger_email: request.passenger_email,
            passenger_phone: request.passenger_phone,
            seat_number: request.seat_number,
            booking_date: booking_date.into(),
            status: BookingStatus::Confirmed,
            total_price: request.total_price,
        }
    }
}

/// Body of a create-booking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub flight_id: i64,
    pub passenger_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_phone: Option<String>,
    pub seat_number: String,
    pub total_price: i64,
}

impl NewBooking {
    /// Build a booking request for `flight`, quoting the fare plus [`SERVICE_FEE`]
    pub fn for_flight(
        flight: &Flight,
        passenger: Passenger,
        seat_number: impl Into<String>,
    ) -> Self {
        Self {
            flight_id: flight.id,
            passenger_name: passenger.full_name(),
            passenger_email: passenger.email,
            passenger_phone: passenger.phone,
            seat_number: seat_number.into(),
            total_price: quote_total(flight.price),
        }
    }
}

/// Passenger details collected before booking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Passenger {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// "First Last", trimmed when either part is empty
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Total price for a fare, including the service fee
pub fn quote_total(fare: i64) -> i64 {
    fare + SERVICE_FEE
}

/// Keep only bookings in `status`; `None` keeps everything
pub fn filter_by_status(bookings: &[Booking], status: Option<BookingStatus>) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| status.map_or(true, |s| b.status == s))
        .cloned()
        .collect()
}

/// Per-status booking counts (ticket list tabs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub all: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn tally(bookings: &[Booking]) -> Self {
        bookings.iter().fold(
            Self {
                all: bookings.len(),
                ..Self::default()
            },
            |mut counts, b| {
                match b.status {
                    BookingStatus::Confirmed => counts.confirmed += 1,
                    BookingStatus::Pending => counts.pending += 1,
                    BookingStatus::Cancelled => counts.cancelled += 1,
                }
                counts
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            flight_id: 1,
            passenger_name: "John Doe".to_string(),
            passenger_email: None,
            passenger_phone: None,
            seat_number: "12A".to_string(),
            booking_date: "2024-01-10".to_string(),
            status,
            total_price: 1_500_000,
        }
    }

    fn flight(price: i64) -> Flight {
        Flight {
            id: 2,
            airline: "Lion Air".to_string(),
            flight_number: "JT-456".to_string(),
            departure_city: "Jakarta".to_string(),
            arrival_city: "Denpasar".to_string(),
            departure_time: "14:15".to_string(),
            arrival_time: "17:00".to_string(),
            departure_date: "2024-01-15".to_string(),
            price,
            available_seats: 32,
            aircraft_type: "Airbus A320".to_string(),
            duration: "2h 45m".to_string(),
        }
    }

    #[rstest]
    #[case("confirmed", BookingStatus::Confirmed)]
    #[case("PENDING", BookingStatus::Pending)]
    #[case("canceled", BookingStatus::Cancelled)]
    fn test_status_parse(#[case] input: &str, #[case] expected: BookingStatus) {
        assert_eq!(input.parse::<BookingStatus>().unwrap(), expected);
    }

    #[test]
    fn test_status_parse_unknown() {
        assert!("boarding".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }

    #[test]
    fn test_new_booking_quote() {
        let passenger = Passenger::new("Budi", "Santoso").with_email("budi@example.com");
        let request = NewBooking::for_flight(&flight(1_200_000), passenger, "3C");

        assert_eq!(request.flight_id, 2);
        assert_eq!(request.passenger_name, "Budi Santoso");
        assert_eq!(request.passenger_email.as_deref(), Some("budi@example.com"));
        assert_eq!(request.passenger_phone, None);
        assert_eq!(request.total_price, 1_350_000);
    }

    #[test]
    fn test_confirmed_keeps_request_fields() {
        let request = NewBooking {
            flight_id: 1,
            passenger_name: "X".to_string(),
            passenger_email: None,
            passenger_phone: Some("0812".to_string()),
            seat_number: "1A".to_string(),
            total_price: 1_650_000,
        };
        let booking = Booking::confirmed("BK42", request, "2024-02-01");

        assert_eq!(booking.id, "BK42");
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.passenger_phone.as_deref(), Some("0812"));
        assert_eq!(booking.booking_date, "2024-02-01");
    }

    #[test]
    fn test_new_booking_minimal_json() {
        let request: NewBooking = serde_json::from_value(serde_json::json!({
            "flight_id": 1,
            "passenger_name": "X",
            "seat_number": "1A",
            "total_price": 1650000
        }))
        .unwrap();
        assert_eq!(request.passenger_email, None);
    }

    #[test]
    fn test_filter_and_tally() {
        let bookings = vec![
            booking("BK1", BookingStatus::Confirmed),
            booking("BK2", BookingStatus::Pending),
            booking("BK3", BookingStatus::Confirmed),
        ];

        let confirmed = filter_by_status(&bookings, Some(BookingStatus::Confirmed));
        assert_eq!(confirmed.len(), 2);
        assert_eq!(filter_by_status(&bookings, None).len(), 3);

        assert_eq!(
            StatusCounts::tally(&bookings),
            StatusCounts {
                all: 3,
                confirmed: 2,
                pending: 1,
                cancelled: 0,
            }
        );
    }
}
