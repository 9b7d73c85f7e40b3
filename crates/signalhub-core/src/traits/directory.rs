//! User directory port for profile, preference, and activity lookups.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::FixedOffset;

use crate::result::AppResult;
use crate::types::channel::Channel;
use crate::types::id::UserId;
use crate::types::profile::{ActivityPattern, ChannelPreferences, UserProfile};

/// Port for resolving recipient data from the host application.
///
/// Every method may legitimately return `Ok(None)` (or an empty map) for
/// unknown users; callers degrade to documented defaults rather than
/// failing. Errors are treated the same way, so a flaky backing store
/// never prevents a notification from being produced.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve the recipient's profile.
    async fn profile(&self, user_id: UserId) -> AppResult<Option<UserProfile>>;

    /// Resolve the recipient's timezone as a UTC offset.
    async fn timezone(&self, user_id: UserId) -> AppResult<Option<FixedOffset>>;

    /// Resolve the recipient's observed activity pattern.
    async fn activity_pattern(&self, user_id: UserId) -> AppResult<Option<ActivityPattern>>;

    /// Resolve the recipient's per-channel opt-in preferences.
    async fn channel_preferences(&self, user_id: UserId) -> AppResult<Option<ChannelPreferences>>;

    /// Resolve per-channel historical performance scores in [0,1].
    /// Channels without an entry score a neutral 0.5.
    async fn channel_performance(&self, user_id: UserId) -> AppResult<HashMap<Channel, f64>>;
}
