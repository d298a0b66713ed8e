//! Application configuration loading and validation.
//!
//! Provides the [`Settings`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; secrets such as the bot token
//! come only from the environment.
//!
//! # Example
//!
//! ```no_run
//! use statuswatch::infrastructure::config::settings::Settings;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load("config.toml")?;
//!     settings.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::info;
use url::Url;

use super::health::HealthConfig;
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::http::SourceConfig;
use crate::domain::BaselinePolicy;
use crate::error::{ConfigError, Result};
use crate::port::NotificationStyle;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Load from a TOML file using [`Settings::load`] or parse directly with
/// [`Settings::parse_toml`]. Every field has a default, so an empty file
/// tracks the Roblox status page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cursor file path.
    pub state_file: PathBuf,
    /// Seconds between checks.
    pub check_interval_secs: u64,
    /// First-observation policy.
    pub baseline: BaselinePolicy,
    /// Footer and `/version` label.
    pub bot_label: String,
    pub logging: LoggingConfig,
    pub source: SourceConfig,
    pub telegram: TelegramAppConfig,
    pub health: HealthConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("tracking_data.json"),
            check_interval_secs: 300,
            baseline: BaselinePolicy::default(),
            bot_label: "Roblox Status Tracker".into(),
            logging: LoggingConfig::default(),
            source: SourceConfig::default(),
            telegram: TelegramAppConfig::default(),
            health: HealthConfig::default(),
        }
    }
}

impl Settings {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` when given; otherwise `config.toml` if present, else the
    /// built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read, or if any
    /// loaded file fails to parse or validate.
    #[allow(clippy::result_large_err)]
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        if fallback.exists() {
            Self::load(fallback)
        } else {
            info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    #[must_use]
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    /// Presentation settings passed to the tracker.
    #[must_use]
    pub fn notification_style(&self) -> NotificationStyle {
        NotificationStyle {
            title: self.source.title.clone(),
            source_label: self.source.source_label.clone(),
            home_url: self.source.home_url.clone(),
            footer: self.bot_label.clone(),
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.check_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "check_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "source.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.source.candidates.is_empty() {
            return Err(ConfigError::MissingField {
                field: "source.candidates",
            }
            .into());
        }
        for candidate in &self.source.candidates {
            Url::parse(&candidate.url).map_err(|e| ConfigError::InvalidValue {
                field: "source.candidates.url",
                reason: format!("`{}`: {e}", candidate.url),
            })?;
            if candidate.marker_pointer.is_empty() || !candidate.marker_pointer.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: "source.candidates.marker_pointer",
                    reason: format!("`{}` is not a JSON pointer", candidate.marker_pointer),
                }
                .into());
            }
        }
        if self.state_file.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "state_file",
            }
            .into());
        }
        self.health.socket_addr()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::http::SourceFormat;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::parse_toml("").unwrap();
        assert_eq!(settings.check_interval(), Duration::from_secs(300));
        assert_eq!(settings.baseline, BaselinePolicy::Silent);
        assert_eq!(settings.state_file, PathBuf::from("tracking_data.json"));
        assert_eq!(settings.source.candidates.len(), 2);
        assert!(settings.telegram.enabled);
        assert!(!settings.health.enabled);
    }

    #[test]
    fn parses_full_config() {
        let toml = r#"
            state_file = "data/state.json"
            check_interval_secs = 60
            baseline = "notify"
            bot_label = "Release Watch"

            [logging]
            level = "debug"
            format = "json"

            [source]
            title = "New Release"
            home_url = "https://example.com"

            [[source.candidates]]
            url = "https://example.com/releases.atom"
            format = "feed"

            [[source.candidates]]
            url = "https://example.com/versions.txt"
            format = "text"
            text_scan = "last"

            [telegram]
            enabled = false

            [health]
            enabled = true
            bind = "127.0.0.1:9000"
        "#;

        let settings = Settings::parse_toml(toml).unwrap();
        assert_eq!(settings.check_interval_secs, 60);
        assert_eq!(settings.baseline, BaselinePolicy::Notify);
        assert_eq!(settings.logging.format, "json");
        assert_eq!(settings.source.candidates[0].format, SourceFormat::Feed);
        assert_eq!(settings.source.timeout_secs, 10);
        assert!(!settings.telegram.enabled);
        assert_eq!(settings.health.socket_addr().unwrap().port(), 9000);

        let style = settings.notification_style();
        assert_eq!(style.title, "New Release");
        assert_eq!(style.footer, "Release Watch");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = Settings::parse_toml("check_interval_secs = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "check_interval_secs",
                ..
            })
        ));
    }

    #[test]
    fn empty_candidates_are_rejected() {
        let err = Settings::parse_toml("[source]\ncandidates = []").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: "source.candidates"
            })
        ));
    }

    #[test]
    fn bad_candidate_url_is_rejected() {
        let toml = "[[source.candidates]]\nurl = \"not a url\"";
        let err = Settings::parse_toml(toml).unwrap_err();
        assert!(err.to_string().contains("source.candidates.url"));
    }

    #[test]
    fn bad_baseline_is_parse_error() {
        let err = Settings::parse_toml(r#"baseline = "loud""#).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }
}
