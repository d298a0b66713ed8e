//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the poll-compare-notify loop.

pub mod scheduler;
pub mod tracker;

pub use scheduler::{run_scheduler, IntervalTicker, ManualTicker, Ticker};
pub use tracker::{TickOutcome, Tracker, TrackerHandle};
