//! Composition root for runtime wiring.
//!
//! Builds the adapters from [`Settings`], connects to the chat platform,
//! starts the tracker actor, the command listener and the health route,
//! then hands control to the scheduler.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info, warn};

#[cfg(feature = "telegram")]
use teloxide::prelude::*;

#[cfg(feature = "telegram")]
use crate::adapter::inbound::telegram::{run_command_listener, BotInfo, TelegramControl};
use crate::adapter::inbound::health;
use crate::adapter::outbound::http::HttpSource;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::TelegramNotifier;
use crate::adapter::outbound::store::JsonFileStore;
use crate::application::{run_scheduler, IntervalTicker, Tracker, TrackerHandle};
use crate::error::{Error, Result};
#[cfg(feature = "telegram")]
use crate::infrastructure::config::telegram::TelegramCredentials;
use crate::infrastructure::config::settings::Settings;
use crate::port::outbound::notifier::LogNotifier;
use crate::port::{Notifier, StateStore, UpdateSource};

/// Crate version reported at startup and by `/version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connected Telegram bot and its identity.
#[cfg(feature = "telegram")]
struct TelegramLink {
    bot: Bot,
    username: String,
    id: u64,
    scope_chat_id: Option<i64>,
}

/// Notification backend chosen at startup.
struct ChatWiring {
    notifier: Arc<dyn Notifier>,
    #[cfg(feature = "telegram")]
    telegram: Option<TelegramLink>,
}

/// Run the tracker until the scheduler stops.
///
/// Startup problems (invalid token, missing environment, unbindable health
/// address) are returned as errors. Once running, the scheduler only stops
/// if the tracker task dies, which is reported as [`Error::TrackerStopped`].
///
/// # Errors
///
/// Returns an error on any startup failure.
pub async fn run(settings: Settings) -> Result<()> {
    info!(
        version = VERSION,
        candidates = settings.source.candidates.len(),
        interval_secs = settings.check_interval_secs,
        baseline = settings.baseline.as_str(),
        state_file = %settings.state_file.display(),
        "statuswatch starting"
    );

    let source = Arc::new(HttpSource::new(&settings.source)?);
    let store: Arc<dyn StateStore> = Arc::new(JsonFileStore::new(settings.state_file.clone()));
    let (ready_tx, ready_rx) = watch::channel(false);

    start_health(&settings).await?;
    let chat = connect_chat(&settings).await?;

    let tracker = Tracker::new(
        source.clone(),
        store,
        chat.notifier.clone(),
        settings.baseline,
        settings.notification_style(),
    );
    if !tracker.state().is_active() {
        warn!("No chat registered yet, send /track in the target chat");
    }
    let (handle, _tracker_task) = TrackerHandle::spawn(tracker);

    start_commands(&chat, &settings, &handle, source.candidate_count());

    ready_tx.send_replace(true);
    info!("Startup complete");

    run_scheduler(
        handle,
        IntervalTicker::new(settings.check_interval()),
        ready_rx,
    )
    .await;

    Err(Error::TrackerStopped)
}

async fn start_health(settings: &Settings) -> Result<()> {
    if !settings.health.enabled {
        return Ok(());
    }

    let listener = TcpListener::bind(settings.health.socket_addr()?).await?;
    tokio::spawn(async move {
        if let Err(e) = health::serve_on(listener).await {
            error!(error = %e, "Health endpoint stopped");
        }
    });
    Ok(())
}

async fn connect_chat(settings: &Settings) -> Result<ChatWiring> {
    #[cfg(feature = "telegram")]
    if settings.telegram.enabled {
        let link = connect_telegram().await?;
        return Ok(ChatWiring {
            notifier: Arc::new(TelegramNotifier::new(link.bot.clone())),
            telegram: Some(link),
        });
    }

    #[cfg(not(feature = "telegram"))]
    if settings.telegram.enabled {
        warn!("Telegram enabled but built without the `telegram` feature, notifications are only logged");
    }

    info!("Chat delivery disabled, notifications are only logged");
    Ok(ChatWiring {
        notifier: Arc::new(LogNotifier),
        #[cfg(feature = "telegram")]
        telegram: None,
    })
}

/// Validate the token with `getMe`; readiness waits on this.
#[cfg(feature = "telegram")]
async fn connect_telegram() -> Result<TelegramLink> {
    let credentials = TelegramCredentials::from_env()?;
    let bot = Bot::new(&credentials.bot_token);

    let me = bot
        .get_me()
        .await
        .map_err(|e| Error::Startup(format!("Telegram rejected the bot token: {e}")))?;

    let link = TelegramLink {
        username: me.username().to_string(),
        id: me.id.0,
        bot,
        scope_chat_id: credentials.scope_chat_id,
    };
    info!(
        bot = %link.username,
        id = link.id,
        scope = ?link.scope_chat_id,
        "Connected to Telegram"
    );
    Ok(link)
}

#[cfg_attr(not(feature = "telegram"), allow(unused_variables))]
fn start_commands(
    chat: &ChatWiring,
    settings: &Settings,
    handle: &TrackerHandle,
    candidate_count: usize,
) {
    #[cfg(feature = "telegram")]
    if let Some(link) = &chat.telegram {
        let info = BotInfo {
            version: VERSION,
            label: settings.bot_label.clone(),
            bot_username: link.username.clone(),
            bot_id: link.id,
            check_interval_secs: settings.check_interval_secs,
            candidate_count,
            baseline: settings.baseline,
        };
        let control = TelegramControl::new(Arc::new(handle.clone()), info);
        tokio::spawn(run_command_listener(
            link.bot.clone(),
            control,
            link.scope_chat_id,
        ));
    }
}
