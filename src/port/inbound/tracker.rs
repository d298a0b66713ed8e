//! Tracker control port for chat command adapters.
//!
//! Keeps the command surface decoupled from the tracker actor so command
//! handling can be tested against a mock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{TrackingState, UpdateRecord};
use crate::error::Result;

/// Outcome of registering a channel.
#[derive(Debug, Clone)]
pub struct Registration {
    pub channel_id: i64,
    /// Record fetched right after registering, if any candidate answered.
    pub record: Option<UpdateRecord>,
    /// Whether the test notification reached the channel.
    pub delivered: bool,
}

/// Read-only view of the tracker.
#[derive(Debug, Clone, Default)]
pub struct TrackerSnapshot {
    pub state: TrackingState,
    /// When the last tick with a registered channel ran.
    pub last_check: Option<DateTime<Utc>>,
    /// Ticks handled since startup, idle ones included.
    pub ticks: u64,
}

/// Operations exposed to inbound adapters.
#[async_trait]
pub trait TrackerControl: Send + Sync {
    /// Register `channel_id` as the notification target, fetch immediately,
    /// and send a test-flagged notification.
    async fn register(&self, channel_id: i64) -> Result<Registration>;

    /// Current state and counters.
    async fn snapshot(&self) -> Result<TrackerSnapshot>;
}
