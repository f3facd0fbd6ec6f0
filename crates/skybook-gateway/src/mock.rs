//! In-memory substitute used when no backend is reachable
//!
//! The substitute answers every operation from a fixed flight dataset and
//! an append-only booking list. It waits a fixed artificial latency first so
//! callers see the same loading behavior in either mode.
//!
//! Flight filters are ignored: listing flights always returns the whole
//! dataset.

use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use skybook_core::{
    AuthSession, Booking, BookingStatus, Flight, GatewayError, GatewayResult, NewBooking,
    Operation, Payload, RegistrationReceipt, UserProfile,
};
use tracing::debug;

/// Token handed out by the substitute login
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// The fixed flight dataset
pub fn sample_flights() -> Vec<Flight> {
    vec![
        Flight {
            id: 1,
            airline: "Garuda Indonesia".to_string(),
            flight_number: "GA-123".to_string(),
            departure_city: "Jakarta".to_string(),
            arrival_city: "Surabaya".to_string(),
            departure_time: "08:00".to_string(),
            arrival_time: "10:30".to_string(),
            departure_date: "2024-01-15".to_string(),
            price: 1_500_000,
            available_seats: 45,
            aircraft_type: "Boeing 737".to_string(),
            duration: "2h 30m".to_string(),
        },
        Flight {
            id: 2,
            airline: "Lion Air".to_string(),
            flight_number: "JT-456".to_string(),
            departure_city: "Jakarta".to_string(),
            arrival_city: "Denpasar".to_string(),
            departure_time: "14:15".to_string(),
            arrival_time: "17:00".to_string(),
            departure_date: "2024-01-15".to_string(),
            price: 1_200_000,
            available_seats: 32,
            aircraft_type: "Airbus A320".to_string(),
            duration: "2h 45m".to_string(),
        },
        Flight {
            id: 3,
            airline: "Batik Air".to_string(),
            flight_number: "ID-789".to_string(),
            departure_city: "Surabaya".to_string(),
            arrival_city: "Jakarta".to_string(),
            departure_time: "19:30".to_string(),
            arrival_time: "22:00".to_string(),
            departure_date: "2024-01-15".to_string(),
            price: 1_350_000,
            available_seats: 28,
            aircraft_type: "Boeing 737-800".to_string(),
            duration: "2h 30m".to_string(),
        },
    ]
}

/// The booking the substitute starts with
pub fn seed_booking() -> Booking {
    Booking {
        id: "BK001".to_string(),
        flight_id: 1,
        passenger_name: "John Doe".to_string(),
        passenger_email: Some("john@example.com".to_string()),
        passenger_phone: None,
        seat_number: "12A".to_string(),
        booking_date: "2024-01-10".to_string(),
        status: BookingStatus::Confirmed,
        total_price: 1_500_000,
    }
}

struct StoreState {
    bookings: Vec<Booking>,
    /// Last millisecond stamp used for an id
    last_stamp: i64,
}

/// Append-only booking list
///
/// Ids are `BK<millis>`; the stamp is bumped past the previous one when two
/// bookings land in the same millisecond, so ids stay unique per process.
pub struct BookingStore {
    state: Mutex<StoreState>,
}

impl BookingStore {
    pub fn new(seed: Vec<Booking>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                bookings: seed,
                last_stamp: 0,
            }),
        }
    }

    /// Confirm and append a booking, returning the stored record
    pub fn insert(&self, request: NewBooking) -> Booking {
        let now = Utc::now();
        let mut state = self.state.lock();

        let stamp = now.timestamp_millis().max(state.last_stamp + 1);
        state.last_stamp = stamp;

        let booking = Booking::confirmed(
            format!("BK{}", stamp),
            request,
            now.date_naive().format("%Y-%m-%d").to_string(),
        );
        state.bookings.push(booking.clone());
        booking
    }

    /// Copy of the current list
    pub fn snapshot(&self) -> Vec<Booking> {
        self.state.lock().bookings.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new(vec![seed_booking()])
    }
}

/// Deterministic stand-in for the remote backend
pub struct MockBackend {
    latency: Duration,
    flights: Vec<Flight>,
    bookings: BookingStore,
}

impl MockBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            flights: sample_flights(),
            bookings: BookingStore::default(),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn bookings(&self) -> &BookingStore {
        &self.bookings
    }

    /// Resolve an operation after the artificial latency
    pub async fn handle(&self, operation: &Operation) -> GatewayResult<Payload> {
        debug!(operation = %operation, "Mock request");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.resolve(operation)
    }

    fn resolve(&self, operation: &Operation) -> GatewayResult<Payload> {
        match operation {
            Operation::ListFlights(_) => Ok(Payload::Flights(self.flights.clone())),
            Operation::GetFlight(id) => self
                .flights
                .iter()
                .find(|f| f.id == *id)
                .cloned()
                .map(Payload::Flight)
                .ok_or_else(|| GatewayError::NotFound(format!("flight {}", id))),
            Operation::CreateBooking(request) => {
                Ok(Payload::Booking(self.bookings.insert(request.clone())))
            }
            Operation::ListBookings => Ok(Payload::Bookings(self.bookings.snapshot())),
            Operation::ListUserBookings(_) => Err(GatewayError::Unsupported(operation.path())),
            Operation::Login(_) => Ok(Payload::Session(AuthSession {
                token: MOCK_TOKEN.to_string(),
                user: UserProfile {
                    id: 1,
                    name: "Demo User".to_string(),
                    email: "demo@example.com".to_string(),
                },
            })),
            Operation::Register(_) => Ok(Payload::Registration(RegistrationReceipt {
                message: "User registered successfully".to_string(),
                user: UserProfile {
                    id: 2,
                    name: "New User".to_string(),
                    email: "new@example.com".to_string(),
                },
            })),
        }
    }
}
