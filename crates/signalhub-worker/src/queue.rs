//! In-memory delivery queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use signalhub_core::types::id::NotificationId;
use signalhub_entity::notification::model::EnhancedNotification;

/// Working set of notifications awaiting dispatch.
///
/// Process-lifetime only, no persistence. Producers may enqueue
/// concurrently; the pending set is mutex-guarded and only the
/// dispatcher drains it.
#[derive(Debug, Default)]
pub struct DeliveryQueue {
    /// Pending notifications, unordered between ticks.
    pending: Mutex<Vec<EnhancedNotification>>,
}

impl DeliveryQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the pending set.
    pub async fn enqueue(&self, notification: EnhancedNotification) {
        tracing::debug!(
            id = %notification.id,
            user_id = %notification.user_id,
            priority = %notification.priority,
            score = notification.score,
            deliver_at = %notification.deliver_at,
            "Enqueued notification"
        );
        self.pending.lock().await.push(notification);
    }

    /// Remove a pending notification by id.
    ///
    /// Returns `true` if the item was still pending; `false` once it
    /// has been delivered (or was never enqueued).
    pub async fn cancel(&self, id: NotificationId) -> bool {
        let mut pending = self.pending.lock().await;
        let before = pending.len();
        pending.retain(|n| n.id != id);
        let removed = pending.len() < before;
        if removed {
            tracing::debug!(id = %id, "Cancelled pending notification");
        }
        removed
    }

    /// Drain everything due at `now`, in dispatch order.
    ///
    /// Order: critical items first (among themselves by score
    /// descending), then the rest by score descending. Deferred items
    /// stay pending for a later tick.
    pub async fn take_due(&self, now: DateTime<Utc>) -> Vec<EnhancedNotification> {
        let mut pending = self.pending.lock().await;
        pending.sort_by(|a, b| {
            b.is_critical()
                .cmp(&a.is_critical())
                .then_with(|| b.score.total_cmp(&a.score))
        });

        let (due, deferred): (Vec<_>, Vec<_>) =
            pending.drain(..).partition(|n| n.is_due(now));
        *pending = deferred;
        due
    }

    /// Snapshot of queue counters at `now`.
    pub async fn stats(&self, now: DateTime<Utc>) -> QueueStats {
        let pending = self.pending.lock().await;
        let due = pending.iter().filter(|n| n.is_due(now)).count();
        QueueStats {
            pending: pending.len(),
            due,
            deferred: pending.len() - due,
        }
    }

    /// Number of pending notifications.
    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Whether nothing is pending.
    pub async fn is_empty(&self) -> bool {
        self.pending.lock().await.is_empty()
    }
}

/// Queue statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStats {
    /// Total pending notifications.
    pub pending: usize,
    /// Pending notifications already due.
    pub due: usize,
    /// Pending notifications scheduled for later.
    pub deferred: usize,
}
