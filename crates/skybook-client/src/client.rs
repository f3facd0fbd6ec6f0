//! SkyBook HTTP Client implementation

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use skybook_core::{
    AuthSession, Booking, Credentials, Flight, FlightQuery, NewBooking, Registration,
    RegistrationReceipt,
};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Result, SkybookClientError};
use crate::types::ErrorResponse;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// SkyBook REST API client
///
/// Paths are resolved relative to the base URL, so a base such as
/// `http://host/api` keeps its `/api` prefix.
#[derive(Debug, Clone)]
pub struct SkybookClient {
    client: Client,
    base_url: Url,
}

impl SkybookClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend (e.g., "http://localhost:3001")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Create a client that reuses an existing connection pool
    pub fn with_http_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Resolve a path against the base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// Append raw segments to the base URL, percent-encoding each one
    fn endpoint_segments(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // =========================================================================
    // Reachability
    // =========================================================================

    /// Lightweight reachability check (`GET /flights`) bounded by `timeout`
    #[instrument(skip(self), fields(base = %self.base_url))]
    pub async fn probe(&self, timeout: Duration) -> Result<()> {
        let url = self.endpoint("/flights")?;
        let response = self.client.get(url).timeout(timeout).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // Flights
    // =========================================================================

    /// List flights, passing filters as query parameters
    #[instrument(skip(self))]
    pub async fn list_flights(&self, query: &FlightQuery) -> Result<Vec<Flight>> {
        let url = self.endpoint("/flights")?;
        debug!("Listing flights from {}", url);

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Get a single flight
    #[instrument(skip(self))]
    pub async fn get_flight(&self, id: i64) -> Result<Flight> {
        let url = self.endpoint(&format!("/flights/{}", id))?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Create a booking
    #[instrument(skip(self, booking), fields(flight_id = booking.flight_id))]
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
        self.post_json("/bookings", booking).await
    }

    /// List all bookings
    #[instrument(skip(self))]
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let url = self.endpoint("/bookings")?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// List the bookings of one user
    #[instrument(skip(self))]
    pub async fn list_user_bookings(&self, user_id: &str) -> Result<Vec<Booking>> {
        let url = self.endpoint_segments(&["bookings", "user", user_id])?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in with email and password
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.post_json("/auth/login", credentials).await
    }

    /// Register a new account
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<RegistrationReceipt> {
        self.post_json("/auth/register", registration).await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self.client.post(url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Handle response and deserialize JSON
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| SkybookClientError::ParseError(e.to_string()))
        } else {
            Err(self.extract_error_from_status(response, status).await)
        }
    }

    /// Extract error from failed response
    async fn extract_error(&self, response: reqwest::Response) -> SkybookClientError {
        let status = response.status();
        self.extract_error_from_status(response, status).await
    }

    async fn extract_error_from_status(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> SkybookClientError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.error,
            Err(_) => format!("HTTP {}", status),
        };

        match status {
            StatusCode::NOT_FOUND => SkybookClientError::NotFound(message),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                SkybookClientError::Timeout
            }
            _ => SkybookClientError::server_error(status.as_u16(), message),
        }
    }
}
