//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::settings::SourceConfig;
use crate::error::{Error, Result};

/// Build the client reused for every candidate request.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_client(config: &SourceConfig) -> Result<Client> {
    debug!(
        timeout_secs = config.timeout_secs,
        user_agent = %config.user_agent,
        "Creating HTTP client"
    );

    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::default())
        .build()
        .map_err(Error::from)
}
