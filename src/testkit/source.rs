//! Scripted [`UpdateSource`] for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::UpdateRecord;
use crate::port::UpdateSource;

/// Replays a fixed queue of fetch results.
///
/// Each `fetch()` pops the next entry; an exhausted queue yields `None`,
/// the same as every candidate failing.
pub struct ScriptedSource {
    results: Mutex<VecDeque<Option<UpdateRecord>>>,
    fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(results: Vec<Option<UpdateRecord>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Queue another result.
    pub fn push(&self, result: Option<UpdateRecord>) {
        self.results.lock().unwrap().push_back(result);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpdateSource for ScriptedSource {
    fn candidate_count(&self) -> usize {
        1
    }

    async fn fetch(&self) -> Option<UpdateRecord> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.results.lock().unwrap().pop_front().flatten()
    }
}
