//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Settings;

/// Run the tracker until it fails or Ctrl-C is pressed.
pub async fn execute(settings: Settings) -> Result<()> {
    tokio::select! {
        result = bootstrap::run(settings) => result,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    }
}
