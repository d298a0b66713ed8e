//! Command execution against the tracker.

use std::sync::Arc;

use crate::domain::BaselinePolicy;
use crate::port::{Registration, TrackerControl};

use super::command::{command_help, TelegramCommand};

/// Static facts reported by `/version`.
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub version: &'static str,
    /// Footer label, e.g. "Roblox Status Tracker".
    pub label: String,
    pub bot_username: String,
    pub bot_id: u64,
    pub check_interval_secs: u64,
    pub candidate_count: usize,
    pub baseline: BaselinePolicy,
}

/// Executes parsed commands and renders plain-text replies.
#[derive(Clone)]
pub struct TelegramControl {
    tracker: Arc<dyn TrackerControl>,
    info: Arc<BotInfo>,
}

impl TelegramControl {
    #[must_use]
    pub fn new(tracker: Arc<dyn TrackerControl>, info: BotInfo) -> Self {
        Self {
            tracker,
            info: Arc::new(info),
        }
    }

    /// Run `command` issued from `chat_id` and return the reply.
    pub async fn execute(&self, command: TelegramCommand, chat_id: i64) -> String {
        match command {
            TelegramCommand::Start | TelegramCommand::Help => command_help().to_string(),
            TelegramCommand::Track => self.track(chat_id).await,
            TelegramCommand::Status => self.status().await,
            TelegramCommand::Version => self.version(),
        }
    }

    async fn track(&self, chat_id: i64) -> String {
        match self.tracker.register(chat_id).await {
            Ok(registration) => self.track_reply(&registration),
            Err(e) => format!("❌ Error: {e}"),
        }
    }

    fn track_reply(&self, registration: &Registration) -> String {
        let interval = format_interval(self.info.check_interval_secs);
        match (&registration.record, registration.delivered) {
            (None, _) => format!(
                "❌ Could not fetch the current update. Please try again later.\n\
                This chat stays registered; the next check runs within {interval}."
            ),
            (Some(_), true) => format!(
                "✅ This chat now receives {} updates!\n🔄 Checking every {interval} for changes.",
                self.info.label
            ),
            (Some(_), false) => "⚠️ This chat is registered, but the test notification could not be \
                delivered. Check that the bot may post here."
                .to_string(),
        }
    }

    async fn status(&self) -> String {
        let snapshot = match self.tracker.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => return format!("❌ Error: {e}"),
        };

        let chat = snapshot
            .state
            .channel_id
            .map_or_else(|| "not registered".to_string(), |id| id.to_string());
        let marker = snapshot.state.last_marker.as_deref().unwrap_or("none yet");
        let last_check = snapshot.last_check.map_or_else(
            || "never".to_string(),
            |at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        );

        format!(
            "📊 Status\n\n\
            Chat: {chat}\n\
            Last update: {marker}\n\
            Last check: {last_check}\n\
            Checks since start: {}",
            snapshot.ticks
        )
    }

    fn version(&self) -> String {
        let info = &self.info;
        format!(
            "🤖 Bot Version\n\n\
            Current Version: {}\n\
            Bot: @{} ({})\n\
            Check Interval: {}\n\
            Candidates: {}\n\
            Baseline: {}\n\n\
            {}",
            info.version,
            info.bot_username,
            info.bot_id,
            format_interval(info.check_interval_secs),
            info.candidate_count,
            info.baseline.as_str(),
            info.label
        )
    }
}

/// Human-readable check interval.
#[must_use]
pub fn format_interval(secs: u64) -> String {
    match secs {
        60 => "1 minute".to_string(),
        s if s % 60 == 0 => format!("{} minutes", s / 60),
        1 => "1 second".to_string(),
        s => format!("{s} seconds"),
    }
}
