//! Backend configuration
//!
//! Sources, later ones winning:
//! 1. `AppConfig::default()`
//! 2. `config/{RUST_ENV}.toml`, if present
//! 3. `NP__`-prefixed environment variables, e.g. `NP__SERVER__PORT=9000`

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Per-request timeout
    pub request_timeout_secs: u64,
}

/// Limits for the water-intake and calendar-note history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Longest accepted calendar note, in characters
    pub max_note_length: usize,
    /// Widest date range a single history query may span
    pub max_query_days: i64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_note_length: 2000,
            max_query_days: 366,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
            },
            history: HistoryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the layered configuration and check its limits
    pub fn load() -> Result<Self> {
        let file = format!("config/{}.toml", Self::environment());

        let loaded: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&file).required(false))
            .add_source(config::Environment::with_prefix("NP").separator("__"))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject limits that would make an endpoint unusable
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        if self.server.request_timeout_secs == 0 {
            problems.push("server.request_timeout_secs must be greater than 0");
        }
        if self.history.max_note_length == 0 {
            problems.push("history.max_note_length must be greater than 0");
        }
        if self.history.max_query_days < 1 {
            problems.push("history.max_query_days must be at least 1");
        }

        if !problems.is_empty() {
            bail!("Invalid configuration: {}", problems.join("; "));
        }
        Ok(())
    }

    /// Value of `RUST_ENV`, `development` when unset
    pub fn environment() -> String {
        env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
    }

    pub fn is_production() -> bool {
        Self::environment() == "production"
    }
}
