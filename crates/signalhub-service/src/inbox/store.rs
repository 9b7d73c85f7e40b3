//! In-memory store backing the in-app delivery channel.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use signalhub_core::types::id::{NotificationId, UserId};
use signalhub_entity::notification::model::EnhancedNotification;

/// A delivered in-app notification retained for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxEntry {
    /// The delivered notification.
    pub notification: EnhancedNotification,
    /// When it landed in the inbox.
    pub delivered_at: DateTime<Utc>,
    /// Whether the user has read it.
    pub read: bool,
}

/// Per-user in-app inboxes.
#[derive(Debug, Default)]
pub struct InboxStore {
    /// Per-user entries, oldest first.
    entries: DashMap<UserId, VecDeque<InboxEntry>>,
}

impl InboxStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a delivered notification to the recipient's inbox.
    pub fn push(&self, notification: EnhancedNotification, delivered_at: DateTime<Utc>) {
        let user_id = notification.user_id;
        self.entries.entry(user_id).or_default().push_back(InboxEntry {
            notification,
            delivered_at,
            read: false,
        });
    }

    /// The most recent entries for a user, newest first.
    pub fn list(&self, user_id: UserId, limit: usize) -> Vec<InboxEntry> {
        self.entries
            .get(&user_id)
            .map(|log| log.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Mark an entry as read. Returns `false` for unknown ids.
    pub fn mark_read(&self, user_id: UserId, notification_id: NotificationId) -> bool {
        let Some(mut log) = self.entries.get_mut(&user_id) else {
            return false;
        };
        match log
            .iter_mut()
            .find(|entry| entry.notification.id == notification_id)
        {
            Some(entry) => {
                entry.read = true;
                true
            }
            None => false,
        }
    }

    /// Count of unread entries for a user.
    pub fn unread_count(&self, user_id: UserId) -> usize {
        self.entries
            .get(&user_id)
            .map(|log| log.iter().filter(|entry| !entry.read).count())
            .unwrap_or(0)
    }

    /// Remove all entries for a user. Returns how many were removed.
    pub fn clear(&self, user_id: UserId) -> usize {
        self.entries
            .remove(&user_id)
            .map(|(_, log)| log.len())
            .unwrap_or(0)
    }
}
