//! Two-tier result types
//!
//! A live network call produces a [`NetworkOutcome`]. The gateway turns every
//! outcome, successful or not, into a [`DispatchResult`], which is what
//! consumers receive. Consumers only branch on success or failure.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{GatewayError, GatewayResult};
use crate::models::{AuthSession, Booking, Flight, RegistrationReceipt};

/// Outcome of a single network exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkOutcome<T> {
    /// 2xx with a decodable body
    Ok(T),
    /// No answer within the configured bound
    Timeout,
    /// Connection failure, non-2xx status or malformed body
    Error(GatewayError),
}

impl<T> NetworkOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, NetworkOutcome::Ok(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> NetworkOutcome<U> {
        match self {
            NetworkOutcome::Ok(value) => NetworkOutcome::Ok(f(value)),
            NetworkOutcome::Timeout => NetworkOutcome::Timeout,
            NetworkOutcome::Error(e) => NetworkOutcome::Error(e),
        }
    }

    pub fn into_result(self) -> GatewayResult<T> {
        match self {
            NetworkOutcome::Ok(value) => Ok(value),
            NetworkOutcome::Timeout => {
                Err(GatewayError::Unreachable("request timed out".to_string()))
            }
            NetworkOutcome::Error(e) => Err(e),
        }
    }
}

/// Data returned by a successful operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Flights(Vec<Flight>),
    Flight(Flight),
    Bookings(Vec<Booking>),
    Booking(Booking),
    Session(AuthSession),
    Registration(RegistrationReceipt),
}

impl Payload {
    pub fn into_flights(self) -> Option<Vec<Flight>> {
        match self {
            Payload::Flights(flights) => Some(flights),
            _ => None,
        }
    }

    pub fn into_flight(self) -> Option<Flight> {
        match self {
            Payload::Flight(flight) => Some(flight),
            _ => None,
        }
    }

    pub fn into_bookings(self) -> Option<Vec<Booking>> {
        match self {
            Payload::Bookings(bookings) => Some(bookings),
            _ => None,
        }
    }

    pub fn into_booking(self) -> Option<Booking> {
        match self {
            Payload::Booking(booking) => Some(booking),
            _ => None,
        }
    }

    pub fn into_session(self) -> Option<AuthSession> {
        match self {
            Payload::Session(session) => Some(session),
            _ => None,
        }
    }

    pub fn into_registration(self) -> Option<RegistrationReceipt> {
        match self {
            Payload::Registration(receipt) => Some(receipt),
            _ => None,
        }
    }
}

/// Resolved result of a dispatched operation
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Success(Payload),
    Failure(GatewayError),
}

impl DispatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Success(_))
    }

    pub fn data(&self) -> Option<&Payload> {
        match self {
            DispatchResult::Success(payload) => Some(payload),
            DispatchResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&GatewayError> {
        match self {
            DispatchResult::Success(_) => None,
            DispatchResult::Failure(e) => Some(e),
        }
    }

    pub fn into_result(self) -> GatewayResult<Payload> {
        match self {
            DispatchResult::Success(payload) => Ok(payload),
            DispatchResult::Failure(e) => Err(e),
        }
    }
}

impl From<GatewayResult<Payload>> for DispatchResult {
    fn from(result: GatewayResult<Payload>) -> Self {
        match result {
            Ok(payload) => DispatchResult::Success(payload),
            Err(e) => DispatchResult::Failure(e),
        }
    }
}

impl Serialize for DispatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DispatchResult", 2)?;
        match self {
            DispatchResult::Success(payload) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", payload)?;
            }
            DispatchResult::Failure(e) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", &e.to_string())?;
            }
        }
        state.end()
    }
}
