//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use signalhub::{
    ActivityPattern, AppError, AppResult, Channel, ChannelPreferences, ChannelSender,
    ContentPreferences, DeliveryMonitor, EnhancedNotification, ManualClock, NotificationId,
    NotificationPipeline, UserDirectory, UserId, UserProfile, UserRole,
};

/// Monday 2025-06-02 09:30 UTC — a weekday inside a peak hour.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap()
}

/// A manual clock frozen at [`start_time`].
pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(start_time()))
}

/// Directory serving fixed data for configured users.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    pub profiles: HashMap<UserId, UserProfile>,
    pub timezones: HashMap<UserId, FixedOffset>,
    pub patterns: HashMap<UserId, ActivityPattern>,
    pub preferences: HashMap<UserId, ChannelPreferences>,
    pub performance: HashMap<UserId, HashMap<Channel, f64>>,
}

impl StaticDirectory {
    /// A directory knowing a single user: Maria, a worker in Dubai
    /// interested in jobs, with an evening peak hour (18:00) and every
    /// channel enabled.
    pub fn with_maria(user_id: UserId) -> Self {
        let mut directory = Self::default();
        directory.profiles.insert(
            user_id,
            UserProfile {
                name: "Maria Santos".to_string(),
                role: UserRole::Worker,
                location: Some("Dubai".to_string()),
                interests: vec!["jobs".to_string()],
                preferences: ContentPreferences::default(),
            },
        );
        directory
            .timezones
            .insert(user_id, FixedOffset::east_opt(0).unwrap());
        directory.patterns.insert(
            user_id,
            ActivityPattern {
                peak_hours: vec![18],
                active_days: vec![1, 2, 3, 4, 5],
                avg_session_minutes: 20,
            },
        );
        directory
            .preferences
            .insert(user_id, ChannelPreferences::default());
        directory
    }
}

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn profile(&self, user_id: UserId) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(&user_id).cloned())
    }

    async fn timezone(&self, user_id: UserId) -> AppResult<Option<FixedOffset>> {
        Ok(self.timezones.get(&user_id).copied())
    }

    async fn activity_pattern(&self, user_id: UserId) -> AppResult<Option<ActivityPattern>> {
        Ok(self.patterns.get(&user_id).cloned())
    }

    async fn channel_preferences(&self, user_id: UserId) -> AppResult<Option<ChannelPreferences>> {
        Ok(self.preferences.get(&user_id).cloned())
    }

    async fn channel_performance(&self, user_id: UserId) -> AppResult<HashMap<Channel, f64>> {
        Ok(self.performance.get(&user_id).cloned().unwrap_or_default())
    }
}

/// Sender that records delivered notification ids, in order.
#[derive(Debug)]
pub struct RecordingSender {
    channel: Channel,
    pub delivered: Mutex<Vec<NotificationId>>,
}

impl RecordingSender {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            delivered: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChannelSender for RecordingSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn deliver(&self, notification: &EnhancedNotification) -> AppResult<()> {
        self.delivered.lock().unwrap().push(notification.id);
        Ok(())
    }
}

/// Sender whose every delivery fails.
#[derive(Debug)]
pub struct FailingSender {
    channel: Channel,
}

impl FailingSender {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ChannelSender for FailingSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn deliver(&self, _notification: &EnhancedNotification) -> AppResult<()> {
        Err(AppError::delivery("transport unavailable"))
    }
}

/// Monitor recording reported channel failures.
#[derive(Debug, Default)]
pub struct RecordingMonitor {
    pub failures: Mutex<Vec<(NotificationId, Channel)>>,
}

impl DeliveryMonitor for RecordingMonitor {
    fn channel_failed(&self, notification_id: NotificationId, channel: Channel, _error: &AppError) {
        self.failures.lock().unwrap().push((notification_id, channel));
    }

    fn tick_failed(&self, _error: &AppError) {}
}

/// A pipeline for Maria with a manual clock and default configuration.
pub fn maria_pipeline() -> (NotificationPipeline, Arc<ManualClock>, UserId) {
    let user_id = UserId::new();
    let clock = manual_clock();
    let pipeline = NotificationPipeline::builder(Arc::new(StaticDirectory::with_maria(user_id)))
        .with_clock(clock.clone())
        .build();
    (pipeline, clock, user_id)
}
