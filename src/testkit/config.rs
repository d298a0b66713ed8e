//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use crate::port::NotificationStyle;

/// Presentation settings matching the default Roblox source.
pub fn notification_style() -> NotificationStyle {
    NotificationStyle {
        title: "Roblox Status Update".into(),
        source_label: "Roblox Status".into(),
        home_url: "https://status.roblox.com".into(),
        footer: "Roblox Update Tracker".into(),
    }
}
