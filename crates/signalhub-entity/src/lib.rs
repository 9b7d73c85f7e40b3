//! # signalhub-entity
//!
//! Domain entity models for SignalHub. Every struct in this crate is a
//! domain value object; all entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod history;
pub mod notification;

pub use history::HistoryEntry;
pub use notification::{EnhancedNotification, NotificationRequest, PriorityTier, Urgency};
