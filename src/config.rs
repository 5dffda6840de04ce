//! Client configuration.
//!
//! The configuration owns the two transport-level knobs this crate does not
//! decide for itself: the API base URL and the request timeout budget.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ServiceError;

/// Default base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Default outbound request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the score endpoints are resolved against.
    pub base_url: String,
    /// Timeout budget for each outbound request.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ServiceError::configuration(format!("failed to read config file: {e}"))
        })?;

        let config: ClientConfig = toml::from_str(&content).map_err(|e| {
            ServiceError::configuration(format!("failed to parse config file: {e}"))
        })?;

        Ok(config)
    }
}
