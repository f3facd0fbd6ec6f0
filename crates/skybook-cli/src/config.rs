//! Configuration file handling for skybook

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skybook_gateway::GatewayConfig;
use std::path::{Path, PathBuf};

/// Configuration for the CLI tool
///
/// ```toml
/// output = "table"
/// no_color = false
///
/// [gateway]
/// candidates = ["http://localhost:3001", "http://localhost:8000"]
/// mock_latency_ms = 500
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default output format
    pub output: Option<String>,
    /// Disable colored output
    pub no_color: Option<bool>,
    /// Gateway settings
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .gateway
            .candidate_urls()
            .with_context(|| format!("Invalid gateway settings in {}", path.display()))?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("skybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(&self, output: Option<&str>, no_color: bool) -> MergedConfig {
        MergedConfig {
            output: output
                .map(String::from)
                .or_else(|| self.output.clone())
                .unwrap_or_else(|| "table".to_string()),
            no_color: no_color || self.no_color.unwrap_or(false),
            gateway: self.gateway.clone(),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub output: String,
    pub no_color: bool,
    pub gateway: GatewayConfig,
}
