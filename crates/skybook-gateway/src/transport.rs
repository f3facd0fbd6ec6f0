//! Transport - the live side of the gateway
//!
//! A [`Transport`] performs probes and live calls and reports every result
//! as a [`NetworkOutcome`]. It never decides about fallback; that is the
//! gateway's job.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use skybook_client::{SkybookClient, SkybookClientError};
use skybook_core::{GatewayError, NetworkOutcome, Operation, Payload};
use url::Url;

/// Network access used by the gateway
#[async_trait]
pub trait Transport: Send + Sync {
    /// Reachability probe against one candidate
    async fn probe(&self, base: &Url, timeout: Duration) -> NetworkOutcome<()>;

    /// Execute an operation against the active base address
    async fn execute(&self, base: &Url, operation: &Operation) -> NetworkOutcome<Payload>;
}

/// HTTP transport backed by [`SkybookClient`]
///
/// One reqwest connection pool is shared across every base address.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(request_timeout: Duration) -> Result<Self, SkybookClientError> {
        let http = Client::builder().timeout(request_timeout).build()?;
        Ok(Self { http })
    }

    fn client_for(&self, base: &Url) -> SkybookClient {
        SkybookClient::with_http_client(self.http.clone(), base.clone())
    }
}

/// Fold a client result into a network outcome
fn outcome<T>(result: Result<T, SkybookClientError>) -> NetworkOutcome<T> {
    match result {
        Ok(value) => NetworkOutcome::Ok(value),
        Err(e) if e.is_timeout() => NetworkOutcome::Timeout,
        Err(e) if e.is_malformed() => NetworkOutcome::Error(GatewayError::Invalid(e.to_string())),
        Err(SkybookClientError::NotFound(message)) => {
            NetworkOutcome::Error(GatewayError::NotFound(message))
        }
        Err(e) => NetworkOutcome::Error(GatewayError::Unreachable(e.to_string())),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn probe(&self, base: &Url, timeout: Duration) -> NetworkOutcome<()> {
        outcome(self.client_for(base).probe(timeout).await)
    }

    async fn execute(&self, base: &Url, operation: &Operation) -> NetworkOutcome<Payload> {
        let client = self.client_for(base);
        match operation {
            Operation::ListFlights(query) => {
                outcome(client.list_flights(query).await).map(Payload::Flights)
            }
            Operation::GetFlight(id) => outcome(client.get_flight(*id).await).map(Payload::Flight),
            Operation::CreateBooking(booking) => {
                outcome(client.create_booking(booking).await).map(Payload::Booking)
            }
            Operation::ListBookings => outcome(client.list_bookings().await).map(Payload::Bookings),
            Operation::ListUserBookings(user_id) => {
                outcome(client.list_user_bookings(user_id).await).map(Payload::Bookings)
            }
            Operation::Login(credentials) => {
                outcome(client.login(credentials).await).map(Payload::Session)
            }
            Operation::Register(registration) => {
                outcome(client.register(registration).await).map(Payload::Registration)
            }
        }
    }
}
