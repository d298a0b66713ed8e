//! In-memory cursor store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::domain::TrackingState;
use crate::error::StoreError;
use crate::port::StateStore;

/// [`StateStore`] that keeps the state in memory.
///
/// Used by `fetch` dry runs and tests. Counts writes so callers can check
/// whether the state was rewritten.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<TrackingState>,
    saves: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state(state: TrackingState) -> Self {
        Self {
            state: Mutex::new(state),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current stored state.
    #[must_use]
    pub fn snapshot(&self) -> TrackingState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> TrackingState {
        self.snapshot()
    }

    fn save(&self, state: &TrackingState) -> Result<(), StoreError> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
