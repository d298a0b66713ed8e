use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Failure of a single candidate endpoint.
///
/// These never escape the fetcher; they are logged and the next candidate is
/// tried.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("empty response body")]
    Empty,

    #[error("failed to parse {format} body: {reason}")]
    Parse {
        format: &'static str,
        reason: String,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err)
        }
    }
}

/// Cursor store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write state file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Notification delivery errors.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("channel {0} could not be resolved")]
    ChannelUnavailable(i64),

    #[error("failed to send message: {0}")]
    Send(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("startup failed: {0}")]
    Startup(String),

    #[error("tracker is no longer running")]
    TrackerStopped,

    #[error("no candidate endpoint produced an update")]
    NoRecord,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_name_the_field() {
        let err = ConfigError::InvalidValue {
            field: "check_interval_secs",
            reason: "must be greater than zero".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for check_interval_secs: must be greater than zero"
        );
    }

    #[test]
    fn wrapped_errors_are_transparent() {
        let err: Error = ConfigError::MissingEnv("TELEGRAM_BOT_TOKEN").into();
        assert_eq!(
            err.to_string(),
            "missing environment variable: TELEGRAM_BOT_TOKEN"
        );
    }

    #[test]
    fn parse_error_mentions_format() {
        let err = FetchError::Parse {
            format: "feed",
            reason: "unexpected end of input".into(),
        };
        assert!(err.to_string().contains("feed"));
    }
}
