//! Logical operations a consumer can dispatch through the gateway

use std::fmt;

use url::Url;

use crate::models::{Credentials, FlightQuery, NewBooking, Registration};

/// HTTP verb used for an operation when running live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A logical operation together with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `GET /flights[?filters]`
    ListFlights(FlightQuery),
    /// `GET /flights/{id}`
    GetFlight(i64),
    /// `POST /bookings`
    CreateBooking(NewBooking),
    /// `GET /bookings`
    ListBookings,
    /// `GET /bookings/user/{userId}`
    ListUserBookings(String),
    /// `POST /auth/login`
    Login(Credentials),
    /// `POST /auth/register`
    Register(Registration),
}

/// Join raw segments into an absolute path, percent-encoding each one
fn encode_path(segments: &[String]) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return format!("/{}", segments.join("/"));
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url.path().to_string()
}

impl Operation {
    /// Short name for log fields
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListFlights(_) => "list_flights",
            Operation::GetFlight(_) => "get_flight",
            Operation::CreateBooking(_) => "create_booking",
            Operation::ListBookings => "list_bookings",
            Operation::ListUserBookings(_) => "list_user_bookings",
            Operation::Login(_) => "login",
            Operation::Register(_) => "register",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Operation::CreateBooking(_) | Operation::Login(_) | Operation::Register(_) => {
                Method::Post
            }
            _ => Method::Get,
        }
    }

    /// Unencoded path segments relative to the base address
    pub fn segments(&self) -> Vec<String> {
        match self {
            Operation::ListFlights(_) => vec!["flights".into()],
            Operation::GetFlight(id) => vec!["flights".into(), id.to_string()],
            Operation::CreateBooking(_) | Operation::ListBookings => vec!["bookings".into()],
            Operation::ListUserBookings(user_id) => {
                vec!["bookings".into(), "user".into(), user_id.clone()]
            }
            Operation::Login(_) => vec!["auth".into(), "login".into()],
            Operation::Register(_) => vec!["auth".into(), "register".into()],
        }
    }

    /// Request path relative to the base address, without query string
    pub fn path(&self) -> String {
        encode_path(&self.segments())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
