//! Cursor persistence port.

use crate::domain::TrackingState;
use crate::error::StoreError;

/// Storage for the single [`TrackingState`] record.
pub trait StateStore: Send + Sync {
    /// Load the stored state.
    ///
    /// Never fails: missing or unreadable state yields the default.
    fn load(&self) -> TrackingState;

    /// Replace the stored state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state could not be written.
    fn save(&self, state: &TrackingState) -> Result<(), StoreError>;
}
