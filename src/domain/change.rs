//! Change detection between the stored cursor and a fresh fetch.

use serde::Deserialize;

/// What to do the first time a marker is observed with no stored cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselinePolicy {
    /// Store the first marker without notifying.
    #[default]
    Silent,
    /// Treat the first marker as a change and notify.
    Notify,
}

impl BaselinePolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Notify => "notify",
        }
    }
}

/// Outcome of comparing a fetched marker against the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Marker matches the stored cursor.
    Unchanged,
    /// No stored cursor; record the marker silently.
    Baseline,
    /// Marker differs; notify. `previous` is `None` on a notified first
    /// observation.
    Changed { previous: Option<String> },
}

/// Exact string comparison; no normalization.
#[must_use]
pub fn detect(stored: Option<&str>, fetched: &str, policy: BaselinePolicy) -> Decision {
    match stored {
        Some(previous) if previous == fetched => Decision::Unchanged,
        Some(previous) => Decision::Changed {
            previous: Some(previous.to_string()),
        },
        None => match policy {
            BaselinePolicy::Silent => Decision::Baseline,
            BaselinePolicy::Notify => Decision::Changed { previous: None },
        },
    }
}
