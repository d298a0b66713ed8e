//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the tracker and the outside world. Outbound
//! ports are implemented by adapters the tracker drives (HTTP sources, the
//! cursor store, chat notifiers); inbound ports are what driving adapters
//! (chat commands) call into.
//!
//! ```text
//!                 ┌──────────────────────┐
//!   /track ──────►│       Tracker        │
//!   /status       │  (single-writer)     │
//!                 └───┬──────┬───────┬───┘
//!                     │      │       │
//!                     ▼      ▼       ▼
//!               ┌────────┐ ┌─────┐ ┌──────────┐
//!               │ Source │ │Store│ │ Notifier │
//!               └────────┘ └─────┘ └──────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::tracker::{Registration, TrackerControl, TrackerSnapshot};
pub use outbound::notifier::{Field, Notification, NotificationStyle, Notifier};
pub use outbound::source::UpdateSource;
pub use outbound::store::StateStore;
