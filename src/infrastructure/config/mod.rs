//! Infrastructure configuration modules.

pub mod health;
pub mod logging;
pub mod settings;
pub mod telegram;
