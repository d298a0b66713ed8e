//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelegramCommand {
    Start,
    Help,
    /// Register the current chat for notifications.
    Track,
    Status,
    Version,
}

impl TelegramCommand {
    /// Whether the command is restricted to chat administrators.
    #[must_use]
    pub const fn requires_admin(self) -> bool {
        matches!(self, Self::Track | Self::Status | Self::Version)
    }
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// A trailing `@botname` on the command is ignored, as are any arguments.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/help" => Ok(TelegramCommand::Help),
        "/track" => Ok(TelegramCommand::Track),
        "/status" => Ok(TelegramCommand::Status),
        "/version" => Ok(TelegramCommand::Version),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "📋 Commands\n\n\
    /track - 📌 Send update notifications to this chat (admin)\n\
    /status - 📊 Registered chat and last seen update (admin)\n\
    /version - 🔖 Bot version and check settings (admin)\n\
    /help - ❓ Show all commands"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("track", "Send update notifications to this chat"),
        ("status", "Registered chat and last seen update"),
        ("version", "Bot version and check settings"),
        ("help", "Show all commands"),
    ]
}
