//! Gateway - discovery, dispatch and status in one injectable object
//!
//! A `Gateway` is constructed once and handed to whoever needs data. It owns
//! the connectivity state, the live transport and the in-memory substitute.
//!
//! Mode only changes through [`Gateway::discover`] / [`Gateway::retry`]. A
//! failed live request degrades that one request to the substitute and
//! leaves the mode alone.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use skybook_core::{
    ConnectivityState, DashboardSummary, DiscoveryResult, DispatchResult, FlightQuery, Mode,
    NetworkOutcome, Operation,
};
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::{ConfigError, GatewayConfig};
use crate::discovery;
use crate::mock::MockBackend;
use crate::transport::{HttpTransport, Transport};

/// Data access gateway
pub struct Gateway {
    /// Candidate base addresses, in probe order
    candidates: Vec<Url>,
    probe_timeout: Duration,
    transport: Arc<dyn Transport>,
    mock: MockBackend,
    state: RwLock<ConnectivityState>,
}

impl Gateway {
    /// Create a gateway that talks HTTP to the configured candidates
    ///
    /// No probe is sent until [`discover`](Self::discover) is called.
    pub fn new(config: &GatewayConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a gateway over a custom transport
    pub fn with_transport(
        config: &GatewayConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            candidates: config.candidate_urls()?,
            probe_timeout: config.probe_timeout(),
            transport,
            mock: MockBackend::new(config.mock_latency()),
            state: RwLock::new(ConnectivityState::checking()),
        })
    }

    /// Create a gateway and run the initial discovery pass
    pub async fn start(config: &GatewayConfig) -> Result<Self, ConfigError> {
        let gateway = Self::new(config)?;
        gateway.discover().await;
        Ok(gateway)
    }

    pub fn candidates(&self) -> &[Url] {
        &self.candidates
    }

    /// The in-memory substitute
    pub fn mock(&self) -> &MockBackend {
        &self.mock
    }

    // =========================================================================
    // Discovery & Status
    // =========================================================================

    /// Probe the candidates and replace the connectivity state
    #[instrument(skip(self))]
    pub async fn discover(&self) -> DiscoveryResult {
        let result = discovery::first_reachable(
            self.transport.as_ref(),
            &self.candidates,
            self.probe_timeout,
        )
        .await;

        let next = match &result {
            DiscoveryResult::Connected { base_address } => {
                ConnectivityState::live(base_address.clone())
            }
            DiscoveryResult::Unavailable => ConnectivityState::fallback(),
        };

        let previous = std::mem::replace(&mut *self.state.write(), next.clone());
        if previous != next {
            info!(from = %previous.mode, to = %next.mode, "{}", next);
        }

        result
    }

    /// Re-run discovery after a manual request from the user
    pub async fn retry(&self) -> DiscoveryResult {
        info!("Retrying backend discovery");
        self.discover().await
    }

    /// Current connectivity state
    pub fn status(&self) -> ConnectivityState {
        self.state.read().clone()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Resolve an operation through the live backend or the substitute
    ///
    /// Always returns a result; failures are reported as
    /// [`DispatchResult::Failure`].
    #[instrument(skip(self, operation), fields(operation = operation.name()))]
    pub async fn dispatch(&self, operation: &Operation) -> DispatchResult {
        let state = self.status();

        if let (Mode::Live, Some(base)) = (state.mode, state.active_base_address.as_ref()) {
            match self.transport.execute(base, operation).await {
                NetworkOutcome::Ok(payload) => return DispatchResult::Success(payload),
                NetworkOutcome::Timeout => {
                    warn!(
                        base = %base,
                        request = %operation,
                        "Live request timed out, using mock data"
                    );
                }
                NetworkOutcome::Error(e) => {
                    warn!(
                        base = %base,
                        request = %operation,
                        kind = e.kind(),
                        error = %e,
                        "Live request failed, using mock data"
                    );
                }
            }
        }

        self.mock.handle(operation).await.into()
    }

    /// Headline counts for the admin dashboard
    ///
    /// Flights and bookings are loaded concurrently. A failed load counts as
    /// an empty list.
    pub async fn dashboard_summary(&self) -> DashboardSummary {
        let flights_op = Operation::ListFlights(FlightQuery::all());
        let bookings_op = Operation::ListBookings;

        let (flights, bookings) =
            tokio::join!(self.dispatch(&flights_op), self.dispatch(&bookings_op));

        let flights = flights
            .into_result()
            .ok()
            .and_then(|p| p.into_flights())
            .unwrap_or_default();
        let bookings = bookings
            .into_result()
            .ok()
            .and_then(|p| p.into_bookings())
            .unwrap_or_default();

        DashboardSummary::from_records(&flights, &bookings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use skybook_core::{
        Booking, BookingStatus, Credentials, Flight, GatewayError, NewBooking, Payload,
    };
    use std::collections::{HashMap, HashSet};

    const A: &str = "http://a.test:3001/";
    const B: &str = "http://b.test:8000/";

    #[derive(Clone, Copy)]
    enum Probe {
        Up,
        Down,
        Hang,
    }

    /// Transport whose probe and request behavior is scripted per base address
    #[derive(Default)]
    struct ScriptedTransport {
        probes: Mutex<HashMap<String, Probe>>,
        probed: Mutex<Vec<String>>,
        fail_requests: Mutex<bool>,
        executed: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        fn set(&self, base: &str, probe: Probe) {
            self.probes.lock().insert(base.to_string(), probe);
        }

        fn probed(&self) -> Vec<String> {
            self.probed.lock().clone()
        }
    }

    fn live_flight() -> Flight {
        Flight {
            id: 77,
            airline: "AirAsia".to_string(),
            flight_number: "QZ-7510".to_string(),
            departure_city: "Bandung".to_string(),
            arrival_city: "Denpasar".to_string(),
            departure_time: "09:00".to_string(),
            arrival_time: "11:05".to_string(),
            departure_date: "2024-05-01".to_string(),
            price: 800_000,
            available_seats: 12,
            aircraft_type: "Airbus A320".to_string(),
            duration: "2h 05m".to_string(),
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn probe(&self, base: &Url, _timeout: Duration) -> NetworkOutcome<()> {
            self.probed.lock().push(base.to_string());
            let probe = self
                .probes
                .lock()
                .get(base.as_str())
                .copied()
                .unwrap_or(Probe::Down);
            match probe {
                Probe::Up => NetworkOutcome::Ok(()),
                Probe::Down => {
                    NetworkOutcome::Error(GatewayError::Unreachable("connection refused".into()))
                }
                Probe::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    NetworkOutcome::Ok(())
                }
            }
        }

        async fn execute(&self, base: &Url, operation: &Operation) -> NetworkOutcome<Payload> {
            self.executed
                .lock()
                .push(format!("{}{}", base, operation.path().trim_start_matches('/')));
            if *self.fail_requests.lock() {
                return NetworkOutcome::Error(GatewayError::Unreachable("reset by peer".into()));
            }
            match operation {
                Operation::ListFlights(_) => {
                    NetworkOutcome::Ok(Payload::Flights(vec![live_flight()]))
                }
                _ => NetworkOutcome::Timeout,
            }
        }
    }

    fn config() -> GatewayConfig {
        GatewayConfig::default()
            .with_candidates([A, B])
            .with_probe_timeout(Duration::from_millis(50))
            .with_mock_latency(Duration::ZERO)
    }

    fn gateway(transport: &Arc<ScriptedTransport>) -> Gateway {
        Gateway::with_transport(&config(), transport.clone()).unwrap()
    }

    fn booking_request() -> NewBooking {
        NewBooking {
            flight_id: 1,
            passenger_name: "X".to_string(),
            passenger_email: None,
            passenger_phone: None,
            seat_number: "1A".to_string(),
            total_price: 1_650_000,
        }
    }

    #[tokio::test]
    async fn test_checking_before_first_discovery() {
        let transport = Arc::new(ScriptedTransport::default());
        let gateway = gateway(&transport);

        assert_eq!(gateway.status(), ConnectivityState::checking());
        assert!(transport.probed().is_empty());

        // Nothing is live yet, so requests resolve through the substitute.
        let result = gateway.dispatch(&Operation::GetFlight(1)).await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_discovery_stops_at_first_reachable() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.set(A, Probe::Down);
        transport.set(B, Probe::Up);
        let gateway = gateway(&transport);

        let result = gateway.discover().await;

        assert!(result.is_success());
        assert_eq!(transport.probed(), vec![A, B]);
        let status = gateway.status();
        assert_eq!(status.mode, Mode::Live);
        assert!(status.reachable);
        assert_eq!(status.active_base_address.unwrap().as_str(), B);
    }

    #[tokio::test]
    async fn test_discovery_does_not_probe_past_winner() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.set(A, Probe::Up);
        transport.set(B, Probe::Up);
        let gateway = gateway(&transport);

        gateway.discover().await;

        assert_eq!(transport.probed(), vec![A]);
        assert_eq!(gateway.status().active_base_address.unwrap().as_str(), A);
    }

    #[tokio::test]
    async fn test_hanging_probe_is_bounded() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.set(A, Probe::Hang);
        transport.set(B, Probe::Up);
        let gateway = gateway(&transport);

        let started = tokio::time::Instant::now();
        gateway.discover().await;

        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(gateway.status().active_base_address.unwrap().as_str(), B);
    }

    #[tokio::test]
    async fn test_all_candidates_down_falls_back() {
        let transport = Arc::new(ScriptedTransport::default());
        let gateway = gateway(&transport);

        let result = gateway.discover().await;

        assert_eq!(result, DiscoveryResult::Unavailable);
        assert_eq!(gateway.status(), ConnectivityState::fallback());
    }

    #[tokio::test]
    async fn test_fallback_list_flights_ignores_filters() {
        let transport = Arc::new(ScriptedTransport::default());
        let gateway = gateway(&transport);
        gateway.discover().await;

        let query = FlightQuery::all()
            .with_route("Jakarta", "Denpasar")
            .with_class("economy");
        let flights = gateway
            .dispatch(&Operation::ListFlights(query))
            .await
            .into_result()
            .unwrap()
            .into_flights()
            .unwrap();

        // The substitute returns the whole dataset, not just Jakarta -> Denpasar.
        assert_eq!(flights.len(), 3);
        assert!(transport.executed.lock().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_get_flight() {
        let transport = Arc::new(ScriptedTransport::default());
        let gateway = gateway(&transport);
        gateway.discover().await;

        let found = gateway.dispatch(&Operation::GetFlight(2)).await;
        assert_eq!(
            found.into_result().unwrap().into_flight().unwrap().flight_number,
            "JT-456"
        );

        let missing = gateway.dispatch(&Operation::GetFlight(999)).await;
        assert!(matches!(missing.error(), Some(GatewayError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fallback_create_booking() {
        let transport = Arc::new(ScriptedTransport::default());
        let gateway = gateway(&transport);
        gateway.discover().await;
        let before = gateway.mock().bookings().len();

        let result = gateway
            .dispatch(&Operation::CreateBooking(booking_request()))
            .await;
        assert!(result.is_success());
        let booking = result.into_result().unwrap().into_booking().unwrap();

        assert!(!booking.id.is_empty());
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(
            booking.booking_date,
            chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
        );
        assert_eq!(gateway.mock().bookings().len(), before + 1);

        let listed: Vec<Booking> = gateway
            .dispatch(&Operation::ListBookings)
            .await
            .into_result()
            .unwrap()
            .into_bookings()
            .unwrap();
        assert!(listed.contains(&booking));
    }

    #[tokio::test]
    async fn test_status_is_stable_between_discoveries() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.set(B, Probe::Up);
        let gateway = gateway(&transport);
        gateway.discover().await;

        let first = gateway.status();
        for _ in 0..10 {
            assert_eq!(gateway.status(), first);
        }
        // Dispatching does not touch connectivity either.
        gateway.dispatch(&Operation::ListBookings).await;
        assert_eq!(gateway.status(), first);
        assert_eq!(transport.probed().len(), 2);
    }

    #[tokio::test]
    async fn test_live_dispatch_uses_transport() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.set(A, Probe::Up);
        let gateway = gateway(&transport);
        gateway.discover().await;

        let flights = gateway
            .dispatch(&Operation::ListFlights(FlightQuery::all()))
            .await
            .into_result()
            .unwrap()
            .into_flights()
            .unwrap();

        assert_eq!(flights, vec![live_flight()]);
        assert_eq!(
            transport.executed.lock().clone(),
            vec![format!("{}flights", A)]
        );
    }

    #[tokio::test]
    async fn test_live_failure_degrades_single_request() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.set(A, Probe::Up);
        *transport.fail_requests.lock() = true;
        let gateway = gateway(&transport);
        gateway.discover().await;

        let op = Operation::Login(Credentials::new("demo@skybook.com", "demo123"));
        let live = gateway.dispatch(&op).await;
        let mock = gateway.mock().handle(&op).await;

        assert_eq!(live.into_result(), mock);
        assert_eq!(gateway.status().mode, Mode::Live);
    }

    #[tokio::test]
    async fn test_live_timeout_degrades_to_not_found() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.set(A, Probe::Up);
        let gateway = gateway(&transport);
        gateway.discover().await;

        // The scripted transport times out on everything but flight listing.
        let result = gateway.dispatch(&Operation::GetFlight(999)).await;
        assert!(matches!(result.error(), Some(GatewayError::NotFound(_))));
        assert!(gateway.status().is_live());
    }

    #[tokio::test]
    async fn test_retry_moves_fallback_to_live() {
        let transport = Arc::new(ScriptedTransport::default());
        let gateway = gateway(&transport);
        gateway.discover().await;
        assert_eq!(gateway.status().mode, Mode::Fallback);

        transport.set(A, Probe::Up);
        let result = gateway.retry().await;

        assert!(result.is_success());
        let status = gateway.status();
        assert_eq!(status.mode, Mode::Live);
        assert_eq!(status.active_base_address.unwrap().as_str(), A);
    }

    #[tokio::test]
    async fn test_retry_overwrites_live_with_fallback() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.set(A, Probe::Up);
        let gateway = gateway(&transport);
        gateway.discover().await;

        transport.set(A, Probe::Down);
        gateway.retry().await;

        assert_eq!(gateway.status(), ConnectivityState::fallback());
    }

    #[tokio::test]
    async fn test_concurrent_bookings_are_serialized() {
        let transport = Arc::new(ScriptedTransport::default());
        let gateway = Arc::new(gateway(&transport));
        gateway.discover().await;

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let gateway = gateway.clone();
                tokio::spawn(async move {
                    gateway
                        .dispatch(&Operation::CreateBooking(booking_request()))
                        .await
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            let booking = task.await.unwrap().into_result().unwrap().into_booking().unwrap();
            ids.insert(booking.id);
        }

        assert_eq!(ids.len(), 20);
        assert_eq!(gateway.mock().bookings().len(), 21);
    }

    #[tokio::test]
    async fn test_dashboard_summary_in_fallback() {
        let transport = Arc::new(ScriptedTransport::default());
        let gateway = gateway(&transport);
        gateway.discover().await;

        let summary = gateway.dashboard_summary().await;
        assert_eq!(
            summary,
            DashboardSummary {
                total_flights: 3,
                total_bookings: 1,
                active_bookings: 1,
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let transport: Arc<dyn Transport> = Arc::new(ScriptedTransport::default());
        let config = GatewayConfig::default().with_candidates(Vec::<String>::new());
        assert!(matches!(
            Gateway::with_transport(&config, transport),
            Err(ConfigError::NoCandidates)
        ));
    }
}
