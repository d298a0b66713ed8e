//! Candidate cascade over HTTP.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::client::build_client;
use super::parser::{parse_body, BodyFormat};
use super::settings::{CandidateConfig, SourceConfig};
use crate::domain::UpdateRecord;
use crate::error::{FetchError, Result};
use crate::port::UpdateSource;

/// [`UpdateSource`] backed by an ordered list of HTTP endpoints.
///
/// Candidates are tried in order; the first one that answers with a
/// parseable body wins. Failures are logged per candidate and never
/// surface to the caller.
pub struct HttpSource {
    client: Client,
    candidates: Vec<CandidateConfig>,
}

impl HttpSource {
    /// Build a source with its own client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Ok(Self::with_client(build_client(config)?, config.candidates.clone()))
    }

    #[must_use]
    pub fn with_client(client: Client, candidates: Vec<CandidateConfig>) -> Self {
        Self { client, candidates }
    }

    async fn fetch_candidate(
        &self,
        candidate: &CandidateConfig,
    ) -> std::result::Result<UpdateRecord, FetchError> {
        let response = self.client.get(&candidate.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        let format = BodyFormat::resolve(candidate.format, content_type.as_deref());
        debug!(url = %candidate.url, ?format, bytes = body.len(), "Candidate responded");
        parse_body(&body, format, candidate)
    }
}

#[async_trait]
impl UpdateSource for HttpSource {
    fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    async fn fetch(&self) -> Option<UpdateRecord> {
        for candidate in &self.candidates {
            match self.fetch_candidate(candidate).await {
                Ok(record) => {
                    info!(url = %candidate.url, marker = %record.marker, "Fetched update");
                    return Some(record);
                }
                Err(e) => {
                    warn!(url = %candidate.url, error = %e, "Candidate failed");
                }
            }
        }

        warn!(candidates = self.candidates.len(), "All candidates failed");
        None
    }
}
