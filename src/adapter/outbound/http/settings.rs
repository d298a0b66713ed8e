//! Source endpoint configuration.

use serde::Deserialize;

/// How a candidate's response body should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Decide from the response `Content-Type`.
    #[default]
    Auto,
    Json,
    Text,
    Feed,
}

/// Which matching line wins when scanning a plain-text body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScan {
    #[default]
    First,
    Last,
}

/// One candidate endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateConfig {
    pub url: String,
    #[serde(default)]
    pub format: SourceFormat,
    /// JSON pointer to the marker value.
    #[serde(default = "default_marker_pointer")]
    pub marker_pointer: String,
    /// JSON pointer to a status indicator. When set, JSON responses produce
    /// status records; otherwise they produce version records.
    #[serde(default)]
    pub indicator_pointer: Option<String>,
    /// Token prefix recognized in plain-text bodies.
    #[serde(default = "default_version_prefix")]
    pub version_prefix: String,
    #[serde(default)]
    pub text_scan: TextScan,
}

fn default_marker_pointer() -> String {
    "/status/description".into()
}

fn default_version_prefix() -> String {
    "version-".into()
}

impl CandidateConfig {
    /// Status-page candidate reading `/status/description` and `/status/indicator`.
    #[must_use]
    pub fn status_page(url: &str) -> Self {
        Self {
            url: url.to_string(),
            format: SourceFormat::Json,
            marker_pointer: default_marker_pointer(),
            indicator_pointer: Some("/status/indicator".into()),
            version_prefix: default_version_prefix(),
            text_scan: TextScan::default(),
        }
    }

    /// Candidate with the given format and default extraction settings.
    #[must_use]
    pub fn with_format(url: &str, format: SourceFormat) -> Self {
        Self {
            url: url.to_string(),
            format,
            marker_pointer: default_marker_pointer(),
            indicator_pointer: None,
            version_prefix: default_version_prefix(),
            text_scan: TextScan::default(),
        }
    }
}

/// Tracked source: candidate endpoints plus presentation labels.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Notification headline.
    #[serde(default = "default_title")]
    pub title: String,
    /// Label for the source link.
    #[serde(default = "default_source_label")]
    pub source_label: String,
    /// Public page of the tracked service.
    #[serde(default = "default_home_url")]
    pub home_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Tried in order until one yields a record.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<CandidateConfig>,
}

fn default_title() -> String {
    "Roblox Status Update".into()
}

fn default_source_label() -> String {
    "Roblox Status".into()
}

fn default_home_url() -> String {
    "https://status.roblox.com".into()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("Mozilla/5.0 (statuswatch/{})", env!("CARGO_PKG_VERSION"))
}

fn default_candidates() -> Vec<CandidateConfig> {
    vec![
        CandidateConfig::status_page("https://status.roblox.com/data/status.json"),
        CandidateConfig::status_page("https://status.roblox.com/api/v2/status.json"),
    ]
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            source_label: default_source_label(),
            home_url: default_home_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            candidates: default_candidates(),
        }
    }
}
