//! Telegram command handling.
//!
//! Lets chat administrators register a chat for notifications and inspect
//! the running tracker. Commands reach the tracker only through the
//! [`TrackerControl`](crate::port::TrackerControl) port.
//!
//! Requires the `telegram` feature to be enabled.

mod auth;
mod command;
mod control;
mod listener;

pub use command::{bot_commands, command_help, parse_command, CommandParseError, TelegramCommand};
pub use control::{format_interval, BotInfo, TelegramControl};
pub use listener::run_command_listener;
