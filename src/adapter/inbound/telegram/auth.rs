//! Authorization for Telegram command handling.

use teloxide::prelude::*;
use tracing::{debug, warn};

use super::command::{command_help, parse_command, CommandParseError};
use super::control::TelegramControl;

/// Reply sent when a non-admin issues an admin command.
pub const ADMIN_REQUIRED: &str = "❌ Admin rights are required to use this command.";

/// Process a message and return a response if it's a command we answer.
///
/// Returns `None` for:
/// - Messages from chats outside the configured scope
/// - Messages that are not commands (don't start with `/`)
///
/// Returns `Some(response)` for:
/// - Valid commands (admin commands only for administrators)
/// - Invalid commands (with error message and help)
pub async fn command_response_for_message(
    bot: &Bot,
    msg: &Message,
    text: &str,
    scope: Option<ChatId>,
    control: &TelegramControl,
) -> Option<String> {
    if !is_in_scope(msg.chat.id, scope) {
        return None;
    }

    let command = match parse_command(text) {
        Ok(command) => command,
        Err(CommandParseError::NotACommand) => return None,
        Err(err) => return Some(format!("Invalid command: {err}\n\n{}", command_help())),
    };

    if command.requires_admin() && !is_admin(bot, msg).await {
        warn!(chat_id = msg.chat.id.0, ?command, "Refusing admin command from non-admin");
        return Some(ADMIN_REQUIRED.to_string());
    }

    debug!(chat_id = msg.chat.id.0, ?command, "Executing command");
    Some(control.execute(command, msg.chat.id.0).await)
}

/// Check if a chat may send commands at all.
fn is_in_scope(incoming_chat: ChatId, scope: Option<ChatId>) -> bool {
    match scope {
        None => true,
        Some(allowed) if allowed == incoming_chat => true,
        Some(_) => {
            warn!(
                chat_id = incoming_chat.0,
                "Ignoring Telegram message from chat outside scope"
            );
            false
        }
    }
}

/// Private chats are always administrative; elsewhere the sender must own or
/// administer the chat.
async fn is_admin(bot: &Bot, msg: &Message) -> bool {
    if msg.chat.is_private() {
        return true;
    }
    // Anonymous group admins post as the chat itself.
    if msg.sender_chat.as_ref().is_some_and(|c| c.id == msg.chat.id) {
        return true;
    }
    let Some(user) = msg.from.as_ref() else {
        return false;
    };

    match bot.get_chat_member(msg.chat.id, user.id).await {
        Ok(member) => member.is_privileged(),
        Err(e) => {
            warn!(chat_id = msg.chat.id.0, error = %e, "Failed to look up chat member");
            false
        }
    }
}
