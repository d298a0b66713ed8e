//! Inbound (driving) ports consumed by inbound adapters such as the Telegram
//! command surface.

pub mod tracker;
