//! Command-line interface definitions.
//!
//! Defines the CLI structure for statuswatch using `clap`. Without a
//! subcommand the tracker runs in the foreground.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Poll a status or update source and notify a chat when it changes
#[derive(Parser, Debug)]
#[command(name = "statuswatch")]
#[command(version)]
pub struct Cli {
    /// Config file [default: config.toml when present, else built-in defaults]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The requested subcommand, `run` when none was given.
    #[must_use]
    pub fn resolved_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the tracker (foreground)
    Run,

    /// Validate configuration and environment without starting
    Check,

    /// Fetch the current update once and print it
    Fetch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_default() {
        let cli = Cli::try_parse_from(["statuswatch"]).unwrap();
        assert_eq!(cli.resolved_command(), Commands::Run);
        assert!(cli.config.is_none());
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["statuswatch", "fetch", "--config", "alt.toml", "--json"]).unwrap();
        assert_eq!(cli.resolved_command(), Commands::Fetch);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(cli.json);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["statuswatch", "pause"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        <Cli as CommandFactory>::command().debug_assert();
    }
}
