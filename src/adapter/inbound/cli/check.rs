//! Handler for the `check` command.

use crate::adapter::inbound::cli::output;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Settings;
use crate::infrastructure::health::{health_check, HealthStatus};

/// Validate configuration and environment without starting the tracker.
pub fn execute(settings: &Settings) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Configuration");
    output::field("State file", settings.state_file.display());
    output::field("Interval", format!("{}s", settings.check_interval_secs));
    output::field("Baseline", settings.baseline.as_str());
    for candidate in &settings.source.candidates {
        output::field("Candidate", &candidate.url);
    }
    output::field(
        "Telegram",
        if settings.telegram.enabled {
            "enabled"
        } else {
            "disabled"
        },
    );
    if settings.health.enabled {
        output::field("Health", &settings.health.bind);
    }

    output::section("Checks");
    let report = health_check(settings);
    for check in report.checks() {
        match check.status() {
            HealthStatus::Healthy => output::success(check.name()),
            HealthStatus::Unhealthy(reason) => {
                output::warning(&format!("{}: {reason}", check.name()));
            }
        }
    }

    if report.is_healthy() {
        output::success("Configuration check complete");
        Ok(())
    } else {
        Err(Error::Startup("configuration check failed".into()))
    }
}
