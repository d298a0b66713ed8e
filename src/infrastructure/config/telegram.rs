//! Telegram configuration.
//!
//! The `[telegram]` section only switches the integration on or off; the bot
//! token and scope come from the environment so they never live in the
//! config file.

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable restricting commands to one chat.
pub const SCOPE_ENV: &str = "TELEGRAM_SCOPE_CHAT_ID";

const fn default_true() -> bool {
    true
}

/// `[telegram]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Deliver notifications and accept commands through Telegram.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

/// Secrets and scope read from the environment.
#[derive(Clone)]
pub struct TelegramCredentials {
    pub bot_token: String,
    /// When set, commands from other chats are ignored.
    pub scope_chat_id: Option<i64>,
}

impl std::fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("bot_token", &"<redacted>")
            .field("scope_chat_id", &self.scope_chat_id)
            .finish()
    }
}

impl TelegramCredentials {
    /// Read `TELEGRAM_BOT_TOKEN` and `TELEGRAM_SCOPE_CHAT_ID`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] when the token is unset or blank and
    /// [`ConfigError::InvalidValue`] when the scope is not a chat id.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(SCOPE_ENV).ok(),
        )
    }

    fn from_values(token: Option<String>, scope: Option<String>) -> Result<Self, ConfigError> {
        let bot_token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingEnv(TOKEN_ENV))?;

        let scope_chat_id = match scope.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: SCOPE_ENV,
                reason: format!("`{raw}` is not a chat id"),
            })?),
        };

        Ok(Self {
            bot_token,
            scope_chat_id,
        })
    }
}
