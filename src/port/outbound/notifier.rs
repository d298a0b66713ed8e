//! Notifier port for update notifications.
//!
//! This module defines the formatted [`Notification`] built from an
//! [`UpdateRecord`] and the trait adapters implement to deliver it to a chat.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Severity, UpdateDetail, UpdateRecord};
use crate::error::DeliveryError;

/// A single labelled value shown under the notification body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    /// Target when the value should render as a hyperlink.
    pub link: Option<String>,
    /// Whether the field may share a line with its neighbours.
    pub inline: bool,
}

impl Field {
    fn new(name: &str, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            link: None,
            inline,
        }
    }

    fn linked(name: &str, value: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            link: Some(link.into()),
            inline: true,
        }
    }
}

/// Static presentation settings shared by every notification.
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    /// Headline, e.g. "Roblox Status Update".
    pub title: String,
    /// Label for the source link.
    pub source_label: String,
    /// Public page of the tracked service.
    pub home_url: String,
    /// Footer text.
    pub footer: String,
}

/// A formatted update, ready to be rendered by a chat adapter.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub fields: Vec<Field>,
    pub footer: String,
    pub timestamp: DateTime<Utc>,
    pub is_test: bool,
    /// Marker of the update this notification announces.
    pub marker: String,
}

impl Notification {
    /// Build a notification for `record`.
    #[must_use]
    pub fn from_update(record: &UpdateRecord, style: &NotificationStyle, is_test: bool) -> Self {
        let severity = Severity::from_indicator(record.indicator());

        let mut title = format!("{} {}", severity.symbol(), style.title);
        if is_test {
            title.push_str(" (Test)");
        }

        let mut fields = Vec::new();
        match &record.detail {
            UpdateDetail::Status { indicator } => {
                fields.push(Field::new("Status Indicator", indicator.clone(), true));
            }
            UpdateDetail::Version { version } => {
                fields.push(Field::new("Version", version.clone(), true));
            }
            UpdateDetail::Entry { link, published } => {
                if let Some(link) = link {
                    fields.push(Field::linked("Link", link.clone(), link.clone()));
                }
                if let Some(published) = published {
                    fields.push(Field::new(
                        "Published",
                        published.format("%Y-%m-%d %H:%M UTC").to_string(),
                        true,
                    ));
                }
            }
        }
        fields.push(Field::linked(
            "Source",
            style.source_label.clone(),
            style.home_url.clone(),
        ));
        if is_test {
            fields.push(Field::new(
                "Test Message",
                "✅ This is a test notification",
                false,
            ));
        }

        Self {
            title,
            description: record.display_title.clone(),
            severity,
            fields,
            footer: style.footer.clone(),
            timestamp: Utc::now(),
            is_test,
            marker: record.marker.clone(),
        }
    }
}

/// Trait for notification delivery backends.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - A chat that cannot be resolved is reported as
///   [`DeliveryError::ChannelUnavailable`]; callers log it and move on
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    /// Deliver `notification` to `channel_id`.
    async fn deliver(
        &self,
        channel_id: i64,
        notification: &Notification,
    ) -> Result<(), DeliveryError>;
}

/// A logging notifier that reports deliveries via tracing.
///
/// Used when no chat backend is configured.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn deliver(
        &self,
        channel_id: i64,
        notification: &Notification,
    ) -> Result<(), DeliveryError> {
        tracing::info!(
            channel_id,
            title = %notification.title,
            description = %notification.description,
            marker = %notification.marker,
            test = notification.is_test,
            "Notification"
        );
        Ok(())
    }
}
