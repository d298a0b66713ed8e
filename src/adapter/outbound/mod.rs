//! Outbound adapters (driven side).

pub mod http;
pub mod notifier;
pub mod store;
