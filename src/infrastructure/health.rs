//! Configuration health reporting for `statuswatch check`.

use crate::error::ConfigError;
use crate::infrastructure::config::settings::Settings;
use crate::infrastructure::config::telegram::TelegramCredentials;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy(String),
}

#[derive(Debug, Clone)]
pub struct HealthCheck {
    name: &'static str,
    critical: bool,
    status: HealthStatus,
}

impl HealthCheck {
    fn new(name: &'static str, critical: bool, problem: Option<String>) -> Self {
        Self {
            name,
            critical,
            status: problem.map_or(HealthStatus::Healthy, HealthStatus::Unhealthy),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn critical(&self) -> bool {
        self.critical
    }

    pub fn status(&self) -> &HealthStatus {
        &self.status
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.status, HealthStatus::Healthy)
    }
}

#[derive(Debug, Clone)]
pub struct HealthReport {
    checks: Vec<HealthCheck>,
}

impl HealthReport {
    pub fn checks(&self) -> &[HealthCheck] {
        &self.checks
    }

    pub fn is_healthy(&self) -> bool {
        self.checks
            .iter()
            .filter(|check| check.critical())
            .all(HealthCheck::is_healthy)
    }
}

/// Check `settings` and the Telegram environment.
pub fn health_check(settings: &Settings) -> HealthReport {
    let telegram = if settings.telegram.enabled {
        TelegramCredentials::from_env().err()
    } else {
        None
    };
    build_report(settings, telegram)
}

fn build_report(settings: &Settings, telegram: Option<ConfigError>) -> HealthReport {
    let mut checks = Vec::new();

    checks.push(HealthCheck::new(
        "candidates",
        true,
        settings
            .source
            .candidates
            .is_empty()
            .then(|| "no candidate endpoints configured".to_string()),
    ));

    checks.push(HealthCheck::new(
        "telegram",
        settings.telegram.enabled,
        telegram.map(|e| e.to_string()),
    ));

    // An unreadable state file is not fatal: the tracker starts fresh.
    let state_problem = match std::fs::read_to_string(&settings.state_file) {
        Ok(raw) => serde_json::from_str::<serde_json::Value>(&raw).err().map(|e| {
            format!(
                "{} is not valid JSON ({e}), it will be reset",
                settings.state_file.display()
            )
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => Some(format!("{}: {e}", settings.state_file.display())),
    };
    checks.push(HealthCheck::new("state_file", false, state_problem));

    if settings.health.enabled {
        checks.push(HealthCheck::new(
            "health_bind",
            true,
            settings.health.socket_addr().err().map(|e| e.to_string()),
        ));
    }

    HealthReport { checks }
}
