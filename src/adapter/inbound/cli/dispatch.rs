//! Subcommand dispatch.

use crate::error::Result;
use crate::infrastructure::config::settings::Settings;

use super::command::{Cli, Commands};
use super::{check, fetch, run};

/// Load settings and run the selected subcommand.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the subcommand fails.
pub async fn execute(cli: Cli) -> Result<()> {
    let settings = Settings::discover(cli.config.as_deref())?;
    settings.init_logging();

    match cli.resolved_command() {
        Commands::Run => run::execute(settings).await,
        Commands::Check => check::execute(&settings),
        Commands::Fetch => fetch::execute(&settings).await,
    }
}
