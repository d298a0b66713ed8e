//! Persistent tracking cursor.

use serde::{Deserialize, Serialize};

/// The single record kept between polls.
///
/// `channel_id` is the chat notifications go to; `last_marker` is the marker
/// of the last delivered (or baseline) update. No history is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingState {
    #[serde(default)]
    pub channel_id: Option<i64>,
    #[serde(default)]
    pub last_marker: Option<String>,
}

impl TrackingState {
    /// Field names used by earlier state file schemas for the cursor.
    pub const LEGACY_MARKER_FIELDS: [&'static str; 3] =
        ["last_status", "last_version", "last_entry_id"];

    #[must_use]
    pub fn new(channel_id: Option<i64>, last_marker: Option<String>) -> Self {
        Self {
            channel_id,
            last_marker,
        }
    }

    /// True once a channel has been registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.channel_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = TrackingState::default();
        assert!(!state.is_active());
        assert!(state.last_marker.is_none());
    }

    #[test]
    fn serializes_nulls_explicitly() {
        let json = serde_json::to_string(&TrackingState::default()).unwrap();
        assert_eq!(json, r#"{"channel_id":null,"last_marker":null}"#);
    }

    #[test]
    fn missing_fields_default_to_none() {
        let state: TrackingState = serde_json::from_str(r#"{"channel_id": 7}"#).unwrap();
        assert_eq!(state, TrackingState::new(Some(7), None));
    }

    #[test]
    fn negative_chat_ids_round_trip() {
        let state = TrackingState::new(Some(-1001234567890), Some("v1".into()));
        let json = serde_json::to_string(&state).unwrap();
        let parsed: TrackingState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
