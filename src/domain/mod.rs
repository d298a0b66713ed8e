//! I/O-free core types: the tracking cursor, fetched update records, the
//! change detector, and the severity mapping used when formatting
//! notifications.

pub mod change;
pub mod severity;
pub mod state;
pub mod update;

pub use change::{detect, BaselinePolicy, Decision};
pub use severity::Severity;
pub use state::TrackingState;
pub use update::{UpdateDetail, UpdateRecord, UNKNOWN_MARKER};
