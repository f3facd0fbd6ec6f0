//! Gateway configuration
//!
//! The candidate list is fixed for the lifetime of a gateway. Changing it
//! means editing the configuration file and constructing a new gateway.
//!
//! ```toml
//! candidates = ["http://localhost:3001", "http://localhost:8000"]
//! probe_timeout_ms = 5000
//! request_timeout_ms = 10000
//! mock_latency_ms = 500
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid candidate address '{address}': {source}")]
    InvalidCandidate {
        address: String,
        #[source]
        source: url::ParseError,
    },

    #[error("At least one candidate address is required")]
    NoCandidates,

    #[error("Failed to build HTTP transport: {0}")]
    Transport(#[from] skybook_client::SkybookClientError),
}

/// Configuration for a [`Gateway`](crate::Gateway)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Base addresses probed in order during discovery
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
    /// Upper bound for a single reachability probe
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Upper bound for a live request
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Artificial delay before the substitute answers
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,
}

fn default_candidates() -> Vec<String> {
    vec![
        "http://localhost:3001".to_string(),
        "http://localhost:8000".to_string(),
    ]
}

fn default_probe_timeout_ms() -> u64 {
    5000
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_mock_latency_ms() -> u64 {
    500
}

fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            probe_timeout_ms: default_probe_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            mock_latency_ms: default_mock_latency_ms(),
        }
    }
}

impl GatewayConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.candidate_urls()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Replace the candidate list
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout_ms = saturating_millis(timeout);
        self
    }

    pub fn with_mock_latency(mut self, latency: Duration) -> Self {
        self.mock_latency_ms = saturating_millis(latency);
        self
    }

    /// Parsed candidate addresses, in declared order
    pub fn candidate_urls(&self) -> Result<Vec<Url>, ConfigError> {
        if self.candidates.is_empty() {
            return Err(ConfigError::NoCandidates);
        }
        self.candidates
            .iter()
            .map(|address| {
                Url::parse(address).map_err(|source| ConfigError::InvalidCandidate {
                    address: address.clone(),
                    source,
                })
            })
            .collect()
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(
            config.candidates,
            vec!["http://localhost:3001", "http://localhost:8000"]
        );
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
        assert_eq!(config.mock_latency(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GatewayConfig::from_toml_str("mock_latency_ms = 0\n").unwrap();
        assert_eq!(config.mock_latency(), Duration::ZERO);
        assert_eq!(config.candidates.len(), 2);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GatewayConfig::from_toml_str("retries = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_candidate_rejected() {
        let err = GatewayConfig::from_toml_str("candidates = [\"localhost 3001\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCandidate { .. }));
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let err = GatewayConfig::from_toml_str("candidates = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoCandidates));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "candidates = [\"http://10.0.0.5:9000\"]\nprobe_timeout_ms = 250"
        )
        .unwrap();

        let config = GatewayConfig::load(file.path()).unwrap();
        let urls = config.candidate_urls().unwrap();
        assert_eq!(urls[0].as_str(), "http://10.0.0.5:9000/");
        assert_eq!(config.probe_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_file() {
        let err = GatewayConfig::load(Path::new("/nonexistent/skybook.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_builders() {
        let config = GatewayConfig::default()
            .with_candidates(["http://a:1"])
            .with_mock_latency(Duration::from_millis(20));
        assert_eq!(config.candidates, vec!["http://a:1"]);
        assert_eq!(config.mock_latency_ms, 20);
    }

    #[test]
    fn test_builders_saturate_huge_durations() {
        let config = GatewayConfig::default()
            .with_probe_timeout(Duration::MAX)
            .with_mock_latency(Duration::from_secs(u64::MAX));
        assert_eq!(config.probe_timeout_ms, u64::MAX);
        assert_eq!(config.mock_latency_ms, u64::MAX);
    }
}
