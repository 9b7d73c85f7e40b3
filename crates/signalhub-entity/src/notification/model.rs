//! Enhanced notification entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use signalhub_core::types::channel::Channel;
use signalhub_core::types::id::{NotificationId, UserId};

use super::priority::PriorityTier;
use super::urgency::Urgency;

/// A notification after scoring and enhancement, ready for dispatch.
///
/// Invariants established by the enhancer: `score` is in [0,1],
/// `channels` is non-empty (at most 3 for critical urgency, at most 2
/// otherwise), and `deliver_at >= created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedNotification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// Event type that triggered this notification.
    pub event_type: String,
    /// Notification category.
    pub category: String,
    /// Caller-declared urgency.
    pub urgency: Urgency,
    /// Final combined score in [0,1].
    pub score: f64,
    /// Priority tier derived from the score.
    pub priority: PriorityTier,
    /// Personalized content.
    pub content: String,
    /// Channels to fan out to, best first.
    pub channels: Vec<Channel>,
    /// When the notification entered the pipeline.
    pub created_at: DateTime<Utc>,
    /// Earliest instant the dispatcher may deliver this item.
    pub deliver_at: DateTime<Utc>,
    /// Free-form structured payload.
    pub metadata: Option<serde_json::Value>,
}

impl EnhancedNotification {
    /// Whether the item may be delivered at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.deliver_at <= now
    }

    /// Whether the item carries critical urgency.
    pub fn is_critical(&self) -> bool {
        self.urgency.is_critical()
    }
}
