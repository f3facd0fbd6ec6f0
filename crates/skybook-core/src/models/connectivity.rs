//! Connectivity state models

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Which path the gateway resolves operations through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No discovery attempt has resolved yet
    Checking,
    /// A backend answered the probe; operations go over the network
    Live,
    /// No backend answered; operations use the in-memory substitute
    Fallback,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Checking => "checking",
            Mode::Live => "live",
            Mode::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// Snapshot of the gateway's connectivity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityState {
    pub reachable: bool,
    pub active_base_address: Option<Url>,
    pub mode: Mode,
}

impl ConnectivityState {
    /// State before the first discovery attempt resolves
    pub fn checking() -> Self {
        Self {
            reachable: false,
            active_base_address: None,
            mode: Mode::Checking,
        }
    }

    pub fn live(base: Url) -> Self {
        Self {
            reachable: true,
            active_base_address: Some(base),
            mode: Mode::Live,
        }
    }

    pub fn fallback() -> Self {
        Self {
            reachable: false,
            active_base_address: None,
            mode: Mode::Fallback,
        }
    }

    pub fn is_live(&self) -> bool {
        self.mode == Mode::Live
    }
}

impl Default for ConnectivityState {
    fn default() -> Self {
        Self::checking()
    }
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.mode, &self.active_base_address) {
            (Mode::Checking, _) => write!(f, "Checking API connection..."),
            (Mode::Live, Some(url)) => write!(f, "Connected to API: {}", url),
            (Mode::Live, None) => write!(f, "Connected to API"),
            (Mode::Fallback, _) => {
                write!(f, "Demo mode - API unavailable, using sample data")
            }
        }
    }
}

/// Outcome of a discovery pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DiscoveryResult {
    /// A candidate answered; it is now the active base address
    Connected { base_address: Url },
    /// Every candidate failed
    Unavailable,
}

impl DiscoveryResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DiscoveryResult::Connected { .. })
    }
}
