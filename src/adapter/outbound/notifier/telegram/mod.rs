//! Telegram notification delivery.
//!
//! Renders [`Notification`](crate::port::Notification)s as MarkdownV2 and
//! sends them through the Bot API.
//!
//! Requires the `telegram` feature to be enabled.

mod format;
mod notifier;

pub use format::{escape_markdown, render_notification, truncate};
pub use notifier::TelegramNotifier;
