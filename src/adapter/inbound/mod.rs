//! Inbound adapters (driving side).

pub mod cli;
pub mod health;
#[cfg(feature = "telegram")]
pub mod telegram;
