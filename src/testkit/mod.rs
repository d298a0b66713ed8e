//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - `ScriptedSource`, an [`UpdateSource`](crate::port::UpdateSource)
//!   that replays queued fetch results.
//! - [`notifier`] - `RecordingNotifier`, which records deliveries and can be
//!   told to fail.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod notifier;
pub mod source;

pub use config::notification_style;
pub use notifier::RecordingNotifier;
pub use source::ScriptedSource;
