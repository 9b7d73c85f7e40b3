//! Delivery history entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use signalhub_core::types::id::NotificationId;

/// A record of one past delivery, used to bias future scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The delivered notification.
    pub notification_id: NotificationId,
    /// Event type of the delivered notification.
    pub event_type: String,
    /// Category of the delivered notification.
    pub category: String,
    /// When the delivery was attempted.
    pub delivered_at: DateTime<Utc>,
    /// Whether delivery was attempted (always true for dispatcher
    /// writes; kept explicit for host-side imports).
    pub delivered: bool,
    /// Whether the user has interacted with the notification.
    pub engaged: bool,
}

impl HistoryEntry {
    /// Whether this entry shares an event type or category with the
    /// given notification attributes.
    pub fn similar_to(&self, event_type: &str, category: &str) -> bool {
        self.event_type == event_type || self.category == category
    }
}
