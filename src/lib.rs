//! statuswatch - poll a status or update source and notify a chat on change.
//!
//! The tracker polls an ordered list of HTTP candidate endpoints, normalizes
//! the first usable response into an update marker, compares it against a
//! persisted cursor and posts a notification to one registered chat when the
//! marker changes.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Tracking state, update records, change detection and
//!   severity mapping. No I/O.
//! - **`port`** - Traits at the seams: `UpdateSource`, `StateStore`,
//!   `Notifier` (outbound) and `TrackerControl` (inbound).
//! - **`adapter`** - reqwest candidate fetcher with JSON/text/feed parsers,
//!   JSON file store, Telegram notifier and commands, axum health route, CLI.
//! - **`application`** - The tracker actor and the fixed-interval scheduler.
//! - **`infrastructure`** - Configuration, logging and startup wiring.
//!
//! # Features
//!
//! - `telegram` (default) - Telegram delivery and commands
//! - `testkit` - Scripted source and recording notifier for integration tests
//!
//! # Example
//!
//! ```no_run
//! use statuswatch::infrastructure::config::settings::Settings;
//! use statuswatch::infrastructure::bootstrap;
//!
//! # async fn example() -> statuswatch::error::Result<()> {
//! let settings = Settings::load("config.toml")?;
//! settings.init_logging();
//! bootstrap::run(settings).await
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
