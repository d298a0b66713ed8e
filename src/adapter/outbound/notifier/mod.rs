//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for chat backends. The tracing-only
//! [`LogNotifier`](crate::port::outbound::notifier::LogNotifier) lives with
//! the port.

#[cfg(feature = "telegram")]
pub mod telegram;
