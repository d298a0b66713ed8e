//! Update source port.

use async_trait::async_trait;

use crate::domain::UpdateRecord;

/// A source of update records.
///
/// Implementations absorb every failure: transport errors, bad statuses and
/// parse errors are logged and reported as `None`.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Number of candidate endpoints tried per fetch.
    fn candidate_count(&self) -> usize;

    /// Fetch the current update, or `None` if no candidate produced one.
    async fn fetch(&self) -> Option<UpdateRecord>;
}
