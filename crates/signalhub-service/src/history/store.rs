//! Bounded in-memory per-user delivery history.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use signalhub_core::config::history::HistoryConfig;
use signalhub_core::types::id::{NotificationId, UserId};
use signalhub_entity::history::HistoryEntry;

/// Append-only per-user delivery log, bounded to the most recent
/// `max_entries_per_user` entries (FIFO eviction).
///
/// Two write paths: the dispatcher appends an entry at send time, and
/// the engagement API flips `engaged` on an existing entry. Reads feed
/// the engagement and frequency scoring signals; within one process a
/// write is visible to the next read.
#[derive(Debug)]
pub struct HistoryStore {
    /// Store bounds and the frequency window.
    config: HistoryConfig,
    /// Per-user logs, oldest entry first.
    entries: DashMap<UserId, VecDeque<HistoryEntry>>,
}

impl HistoryStore {
    /// Create an empty store.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    /// Append an entry for a user, evicting the oldest past the bound.
    pub fn record(&self, user_id: UserId, entry: HistoryEntry) {
        let mut log = self.entries.entry(user_id).or_default();
        log.push_back(entry);
        while log.len() > self.config.max_entries_per_user {
            log.pop_front();
        }
    }

    /// Mark the entry for `notification_id` as engaged.
    ///
    /// Idempotent: marking an already-engaged entry is a no-op that
    /// still returns `true`. Returns `false` when the id is unknown.
    pub fn mark_engaged(&self, user_id: UserId, notification_id: NotificationId) -> bool {
        let Some(mut log) = self.entries.get_mut(&user_id) else {
            return false;
        };
        match log
            .iter_mut()
            .find(|entry| entry.notification_id == notification_id)
        {
            Some(entry) => {
                entry.engaged = true;
                true
            }
            None => false,
        }
    }

    /// Snapshot of a user's history, oldest first.
    pub fn snapshot(&self, user_id: UserId) -> Vec<HistoryEntry> {
        self.entries
            .get(&user_id)
            .map(|log| log.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Count of entries delivered inside the trailing frequency window.
    pub fn recent_count(&self, user_id: UserId, now: DateTime<Utc>) -> usize {
        let cutoff = now - Duration::hours(self.config.frequency_window_hours);
        self.entries
            .get(&user_id)
            .map(|log| {
                log.iter()
                    .filter(|entry| entry.delivered_at > cutoff)
                    .count()
            })
            .unwrap_or(0)
    }

    /// Number of retained entries for a user.
    pub fn len(&self, user_id: UserId) -> usize {
        self.entries.get(&user_id).map(|log| log.len()).unwrap_or(0)
    }

    /// Whether the user has no retained entries.
    pub fn is_empty(&self, user_id: UserId) -> bool {
        self.len(user_id) == 0
    }
}
