//! Recording [`Notifier`] for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::DeliveryError;
use crate::port::{Notification, Notifier};

/// Records every delivered notification with its target channel.
///
/// [`fail_next`](Self::fail_next) makes the next `n` deliveries fail with
/// [`DeliveryError::ChannelUnavailable`]; failed deliveries are not recorded.
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<(i64, Notification)>>,
    failures: AtomicUsize,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    pub fn deliveries(&self) -> Vec<(i64, Notification)> {
        self.delivered.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn deliver(
        &self,
        channel_id: i64,
        notification: &Notification,
    ) -> Result<(), DeliveryError> {
        let failing = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(DeliveryError::ChannelUnavailable(channel_id));
        }

        self.delivered
            .lock()
            .unwrap()
            .push((channel_id, notification.clone()));
        Ok(())
    }
}
