//! Telegram [`Notifier`] implementation.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::{ApiError, RequestError};
use tracing::{debug, error};

use super::format::render_notification;
use crate::error::DeliveryError;
use crate::port::{Notification, Notifier};

/// Sends notifications to a Telegram chat.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn deliver(
        &self,
        channel_id: i64,
        notification: &Notification,
    ) -> Result<(), DeliveryError> {
        let text = render_notification(notification);

        match self
            .bot
            .send_message(ChatId(channel_id), text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            Ok(_) => {
                debug!(channel_id, marker = %notification.marker, "Telegram message sent");
                Ok(())
            }
            Err(e) => {
                error!(channel_id, error = %e, "Failed to send Telegram message");
                Err(classify(channel_id, e))
            }
        }
    }
}

/// Map Bot API failures that mean the chat is gone to `ChannelUnavailable`.
fn classify(channel_id: i64, err: RequestError) -> DeliveryError {
    match err {
        RequestError::Api(
            ApiError::ChatNotFound
            | ApiError::BotBlocked
            | ApiError::BotKicked
            | ApiError::BotKickedFromSupergroup
            | ApiError::UserDeactivated,
        ) => DeliveryError::ChannelUnavailable(channel_id),
        other => DeliveryError::Send(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_chat_is_unavailable() {
        let err = classify(42, RequestError::Api(ApiError::ChatNotFound));
        assert!(matches!(err, DeliveryError::ChannelUnavailable(42)));
    }

    #[test]
    fn bot_removed_is_unavailable() {
        let err = classify(-7, RequestError::Api(ApiError::BotKicked));
        assert!(matches!(err, DeliveryError::ChannelUnavailable(-7)));
    }

    #[test]
    fn other_api_errors_are_send_failures() {
        let err = classify(42, RequestError::Api(ApiError::MessageTextIsEmpty));
        assert!(matches!(err, DeliveryError::Send(_)));
    }
}
