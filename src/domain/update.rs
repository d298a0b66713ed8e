//! Records produced by a successful fetch.

use chrono::{DateTime, Utc};

/// Sentinel used when a source responds but omits the expected field.
pub const UNKNOWN_MARKER: &str = "Unknown";

/// Source-specific fields carried alongside the marker.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateDetail {
    /// Status page response with its severity indicator keyword.
    Status { indicator: String },
    /// Version string read from a JSON field or a plain-text listing.
    Version { version: String },
    /// First entry of an RSS/Atom feed.
    Entry {
        link: Option<String>,
        published: Option<DateTime<Utc>>,
    },
}

/// A normalized update read from one candidate endpoint.
///
/// Constructed per fetch and discarded once the tick is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRecord {
    /// Opaque comparable value used for change detection.
    pub marker: String,
    /// Human-readable headline for the notification body.
    pub display_title: String,
    pub detail: UpdateDetail,
    /// Candidate URL that produced this record.
    pub source_url: String,
}

impl UpdateRecord {
    pub fn status(
        description: impl Into<String>,
        indicator: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        let description = description.into();
        Self {
            marker: description.clone(),
            display_title: description,
            detail: UpdateDetail::Status {
                indicator: indicator.into(),
            },
            source_url: source_url.into(),
        }
    }

    pub fn version(version: impl Into<String>, source_url: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            marker: version.clone(),
            display_title: format!("New version: {version}"),
            detail: UpdateDetail::Version { version },
            source_url: source_url.into(),
        }
    }

    pub fn entry(
        id: impl Into<String>,
        title: impl Into<String>,
        link: Option<String>,
        published: Option<DateTime<Utc>>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            marker: id.into(),
            display_title: title.into(),
            detail: UpdateDetail::Entry { link, published },
            source_url: source_url.into(),
        }
    }

    /// Severity keyword, when the source reports one.
    #[must_use]
    pub fn indicator(&self) -> Option<&str> {
        match &self.detail {
            UpdateDetail::Status { indicator } => Some(indicator),
            _ => None,
        }
    }
}
