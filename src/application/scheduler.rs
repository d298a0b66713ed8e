//! Fixed-interval scheduler loop.
//!
//! The loop waits for the readiness flag, then asks the tracker for one
//! check per tick. Ticks never overlap because each one waits for the
//! tracker's reply before the next tick is awaited.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::tracker::TrackerHandle;

/// Source of scheduler ticks.
#[async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick. Returns `false` when no more ticks will come.
    async fn tick(&mut self) -> bool;
}

/// Production ticker with a fixed period. The first tick fires immediately.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Ticker driven by hand through a channel.
///
/// Each `()` sent on the paired sender produces one tick; dropping the
/// sender ends the loop.
pub struct ManualTicker {
    receiver: mpsc::Receiver<()>,
}

impl ManualTicker {
    #[must_use]
    pub fn new() -> (Self, mpsc::Sender<()>) {
        let (sender, receiver) = mpsc::channel(8);
        (Self { receiver }, sender)
    }
}

#[async_trait]
impl Ticker for ManualTicker {
    async fn tick(&mut self) -> bool {
        self.receiver.recv().await.is_some()
    }
}

/// Drive the tracker until the ticker stops or the tracker goes away.
///
/// Nothing happens until `ready` reads `true`.
pub async fn run_scheduler<T: Ticker>(
    tracker: TrackerHandle,
    mut ticker: T,
    mut ready: watch::Receiver<bool>,
) {
    if ready.wait_for(|ready| *ready).await.is_err() {
        warn!("Readiness signal dropped before startup completed, scheduler not started");
        return;
    }
    info!("Scheduler started");

    while ticker.tick().await {
        match tracker.tick().await {
            Ok(outcome) => debug!(?outcome, "Check complete"),
            Err(e) => {
                error!(error = %e, "Tracker unavailable, stopping scheduler");
                break;
            }
        }
    }

    info!("Scheduler stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapter::outbound::store::MemoryStore;
    use crate::application::tracker::Tracker;
    use crate::domain::{BaselinePolicy, TrackingState, UpdateRecord};
    use crate::port::TrackerControl;
    use crate::testkit::{notification_style, RecordingNotifier, ScriptedSource};

    fn spawn_tracker(
        state: TrackingState,
        records: Vec<Option<UpdateRecord>>,
    ) -> (TrackerHandle, Arc<ScriptedSource>, Arc<RecordingNotifier>) {
        let source = Arc::new(ScriptedSource::new(records));
        let notifier = Arc::new(RecordingNotifier::new());
        let tracker = Tracker::new(
            source.clone(),
            Arc::new(MemoryStore::with_state(state)),
            notifier.clone(),
            BaselinePolicy::Silent,
            notification_style(),
        );
        let (handle, _task) = TrackerHandle::spawn(tracker);
        (handle, source, notifier)
    }

    #[tokio::test]
    async fn waits_for_readiness() {
        let (handle, source, _) = spawn_tracker(
            TrackingState::new(Some(1), None),
            vec![Some(UpdateRecord::version("v1", "https://x"))],
        );
        let (ticker, ticks) = ManualTicker::new();
        let (ready_tx, ready_rx) = watch::channel(false);
        let loop_task = tokio::spawn(run_scheduler(handle.clone(), ticker, ready_rx));

        ticks.send(()).await.unwrap();
        tokio::task::yield_now().await;
        assert_eq!(handle.snapshot().await.unwrap().ticks, 0);

        ready_tx.send(true).unwrap();
        drop(ticks);
        loop_task.await.unwrap();

        assert_eq!(handle.snapshot().await.unwrap().ticks, 1);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn dropped_readiness_never_starts() {
        let (handle, _, _) = spawn_tracker(TrackingState::default(), vec![]);
        let (ticker, _ticks) = ManualTicker::new();
        let (ready_tx, ready_rx) = watch::channel(false);
        drop(ready_tx);

        run_scheduler(handle.clone(), ticker, ready_rx).await;
        assert_eq!(handle.snapshot().await.unwrap().ticks, 0);
    }

    #[tokio::test]
    async fn each_tick_runs_one_check() {
        let (handle, _, notifier) = spawn_tracker(
            TrackingState::new(Some(7), Some("v1".into())),
            vec![
                Some(UpdateRecord::version("v1", "https://x")),
                Some(UpdateRecord::version("v2", "https://x")),
                None,
            ],
        );
        let (ticker, ticks) = ManualTicker::new();
        let (_ready_tx, ready_rx) = watch::channel(true);
        let loop_task = tokio::spawn(run_scheduler(handle.clone(), ticker, ready_rx));

        for _ in 0..3 {
            ticks.send(()).await.unwrap();
        }
        drop(ticks);
        loop_task.await.unwrap();

        assert_eq!(handle.snapshot().await.unwrap().ticks, 3);
        assert_eq!(notifier.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticker_fires_immediately() {
        let mut ticker = IntervalTicker::new(Duration::from_secs(300));
        let start = time::Instant::now();
        assert!(ticker.tick().await);
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(ticker.tick().await);
        assert!(start.elapsed() >= Duration::from_secs(300));
    }
}
