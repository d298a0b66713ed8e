//! Health endpoint configuration.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Static health route settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Serve `GET /` when true.
    pub enabled: bool,
    /// Listen address.
    pub bind: String,
}

impl HealthConfig {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `bind` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "health.bind",
                reason: format!("`{}`: {e}", self.bind),
            })
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bind: "0.0.0.0:8080".into(),
        }
    }
}
