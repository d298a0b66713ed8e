//! Tracker service and its single-writer actor.
//!
//! [`Tracker`] owns the [`TrackingState`] and performs one check per tick:
//! fetch, compare against the cursor, notify on change, persist. The
//! [`TrackerHandle`] serializes ticks and registrations through a channel so
//! the state has exactly one writer.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::domain::{detect, BaselinePolicy, Decision, TrackingState};
use crate::error::{Error, Result};
use crate::port::{
    Notification, NotificationStyle, Notifier, Registration, StateStore, TrackerControl,
    TrackerSnapshot, UpdateSource,
};

/// Queue depth for tracker commands.
const COMMAND_BUFFER: usize = 16;

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No channel registered; nothing fetched.
    Idle,
    /// Every candidate failed.
    NoRecord,
    Unchanged,
    /// First observation stored without notifying.
    Baseline { marker: String },
    Notified { marker: String },
    /// Change detected but the notification was not delivered; the cursor
    /// stays put so the next tick retries.
    DeliveryFailed { marker: String },
}

/// Poll-compare-notify service.
pub struct Tracker {
    source: Arc<dyn UpdateSource>,
    store: Arc<dyn StateStore>,
    notifier: Arc<dyn Notifier>,
    baseline: BaselinePolicy,
    style: NotificationStyle,
    state: TrackingState,
    last_check: Option<DateTime<Utc>>,
    ticks: u64,
}

impl Tracker {
    /// Create a tracker, loading the persisted state from `store`.
    pub fn new(
        source: Arc<dyn UpdateSource>,
        store: Arc<dyn StateStore>,
        notifier: Arc<dyn Notifier>,
        baseline: BaselinePolicy,
        style: NotificationStyle,
    ) -> Self {
        let state = store.load();
        info!(
            channel_id = ?state.channel_id,
            last_marker = ?state.last_marker,
            notifier = notifier.name(),
            "Tracking state loaded"
        );

        Self {
            source,
            store,
            notifier,
            baseline,
            style,
            state,
            last_check: None,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            state: self.state.clone(),
            last_check: self.last_check,
            ticks: self.ticks,
        }
    }

    /// Run one check.
    pub async fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;

        let Some(channel_id) = self.state.channel_id else {
            debug!("No channel registered, skipping check");
            return TickOutcome::Idle;
        };
        self.last_check = Some(Utc::now());

        let Some(record) = self.source.fetch().await else {
            return TickOutcome::NoRecord;
        };

        match detect(self.state.last_marker.as_deref(), &record.marker, self.baseline) {
            Decision::Unchanged => {
                debug!(marker = %record.marker, "Update unchanged");
                TickOutcome::Unchanged
            }
            Decision::Baseline => {
                info!(marker = %record.marker, "Baseline established");
                self.advance(record.marker.clone());
                TickOutcome::Baseline {
                    marker: record.marker,
                }
            }
            Decision::Changed { previous } => {
                info!(
                    previous = previous.as_deref().unwrap_or("<none>"),
                    current = %record.marker,
                    "Update detected"
                );
                let notification = Notification::from_update(&record, &self.style, false);
                match self.notifier.deliver(channel_id, &notification).await {
                    Ok(()) => {
                        self.advance(record.marker.clone());
                        TickOutcome::Notified {
                            marker: record.marker,
                        }
                    }
                    Err(e) => {
                        warn!(channel_id, error = %e, "Notification not delivered");
                        TickOutcome::DeliveryFailed {
                            marker: record.marker,
                        }
                    }
                }
            }
        }
    }

    /// Make `channel_id` the notification target, fetch right away and send a
    /// test notification.
    ///
    /// The channel stays registered even when the fetch fails. The cursor is
    /// re-baselined to the fetched marker once the test notification lands.
    pub async fn register(&mut self, channel_id: i64) -> Registration {
        if let Some(previous) = self.state.channel_id.filter(|id| *id != channel_id) {
            info!(previous, channel_id, "Replacing registered channel");
        }
        self.state.channel_id = Some(channel_id);
        self.persist();
        info!(channel_id, "Channel registered");

        let Some(record) = self.source.fetch().await else {
            warn!(channel_id, "Could not fetch current update after registration");
            return Registration {
                channel_id,
                record: None,
                delivered: false,
            };
        };

        let notification = Notification::from_update(&record, &self.style, true);
        let delivered = match self.notifier.deliver(channel_id, &notification).await {
            Ok(()) => {
                self.advance(record.marker.clone());
                true
            }
            Err(e) => {
                warn!(channel_id, error = %e, "Test notification not delivered");
                false
            }
        };

        Registration {
            channel_id,
            record: Some(record),
            delivered,
        }
    }

    fn advance(&mut self, marker: String) {
        self.state.last_marker = Some(marker);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            error!(error = %e, "Failed to persist tracking state");
        }
    }
}

enum Command {
    Tick(oneshot::Sender<TickOutcome>),
    Register {
        channel_id: i64,
        reply: oneshot::Sender<Registration>,
    },
    Snapshot(oneshot::Sender<TrackerSnapshot>),
}

/// Cloneable handle to a running [`Tracker`].
#[derive(Clone)]
pub struct TrackerHandle {
    sender: mpsc::Sender<Command>,
}

impl TrackerHandle {
    /// Move `tracker` onto its own task and return a handle to it.
    ///
    /// The task ends once every handle has been dropped.
    #[must_use]
    pub fn spawn(tracker: Tracker) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        let task = tokio::spawn(run_tracker(tracker, receiver));
        (Self { sender }, task)
    }

    /// Ask the tracker to run one check and wait for the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrackerStopped`] if the tracker task has exited.
    pub async fn tick(&self) -> Result<TickOutcome> {
        self.request(Command::Tick).await
    }

    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(make(reply))
            .await
            .map_err(|_| Error::TrackerStopped)?;
        response.await.map_err(|_| Error::TrackerStopped)
    }
}

#[async_trait]
impl TrackerControl for TrackerHandle {
    async fn register(&self, channel_id: i64) -> Result<Registration> {
        self.request(|reply| Command::Register { channel_id, reply })
            .await
    }

    async fn snapshot(&self) -> Result<TrackerSnapshot> {
        self.request(Command::Snapshot).await
    }
}

async fn run_tracker(mut tracker: Tracker, mut receiver: mpsc::Receiver<Command>) {
    debug!("Tracker task started");

    while let Some(command) = receiver.recv().await {
        match command {
            Command::Tick(reply) => {
                let outcome = tracker.tick().await;
                let _ = reply.send(outcome);
            }
            Command::Register { channel_id, reply } => {
                let registration = tracker.register(channel_id).await;
                let _ = reply.send(registration);
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(tracker.snapshot());
            }
        }
    }

    debug!("Tracker task stopped");
}
