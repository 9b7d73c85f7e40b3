//! The enhancer: turns a validated request into a deliverable
//! notification.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{FixedOffset, Offset};
use tracing::warn;

use signalhub_core::config::scoring::ScoringConfig;
use signalhub_core::traits::clock::Clock;
use signalhub_core::traits::directory::UserDirectory;
use signalhub_core::traits::scoring::ScoringHooks;
use signalhub_core::types::id::{NotificationId, UserId};
use signalhub_core::AppResult;
use signalhub_entity::notification::model::EnhancedNotification;
use signalhub_entity::notification::priority::PriorityTier;
use signalhub_entity::notification::request::NotificationRequest;

use crate::history::HistoryStore;
use crate::scoring::model::{self, ScoreBreakdown};
use crate::scoring::signals;

use super::channels;
use super::personalize;
use super::schedule;

/// Produces an [`EnhancedNotification`] from a raw request.
///
/// Enhancement never fails: every directory lookup degrades to a
/// documented default, so a missing profile or a flaky backing store
/// still yields a deliverable notification.
#[derive(Debug, Clone)]
pub struct Enhancer {
    /// Recipient data lookups.
    directory: Arc<dyn UserDirectory>,
    /// Score adjustment hooks.
    hooks: Arc<dyn ScoringHooks>,
    /// Delivery history feeding the engagement and frequency signals.
    history: Arc<HistoryStore>,
    /// Time source.
    clock: Arc<dyn Clock>,
    /// Weights and scheduling defaults.
    config: ScoringConfig,
}

impl Enhancer {
    /// Create a new enhancer.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hooks: Arc<dyn ScoringHooks>,
        history: Arc<HistoryStore>,
        clock: Arc<dyn Clock>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            directory,
            hooks,
            history,
            clock,
            config,
        }
    }

    /// Score, personalize, schedule, and channel-select a request.
    pub async fn enhance(&self, request: &NotificationRequest) -> EnhancedNotification {
        let user_id = request.user_id;
        let now = self.clock.now();

        let profile = degraded(self.directory.profile(user_id).await, user_id, "profile");
        let timezone = degraded(self.directory.timezone(user_id).await, user_id, "timezone");
        let pattern = degraded(
            self.directory.activity_pattern(user_id).await,
            user_id,
            "activity_pattern",
        );
        let preferences = degraded(
            self.directory.channel_preferences(user_id).await,
            user_id,
            "channel_preferences",
        );
        let performance = match self.directory.channel_performance(user_id).await {
            Ok(scores) => scores,
            Err(error) => {
                warn!(user_id = %user_id, lookup = "channel_performance", error = %error,
                    "Directory lookup failed, using defaults");
                HashMap::new()
            }
        };

        let offset = timezone.unwrap_or_else(utc_offset);
        let local_now = now.with_timezone(&offset);
        let history = self.history.snapshot(user_id);
        let recent = self.history.recent_count(user_id, now);

        let breakdown = ScoreBreakdown {
            urgency: signals::urgency_score(request.urgency),
            relevance: signals::relevance_score(request, profile.as_ref()),
            engagement: signals::engagement_score(request, &history),
            timing: signals::timing_score(local_now),
            frequency: signals::frequency_score(recent),
        };
        let base = breakdown.weighted(&self.config.weights);
        let factors = [
            self.hooks.success_rate(&request.event_type).await,
            self.hooks
                .behavior_adjustment(user_id, &request.category)
                .await,
            self.hooks.time_adjustment(now).await,
        ];
        let score = model::apply_adjustments(base, factors);

        let content = personalize::personalize(&request.content, &request.event_type, profile.as_ref());
        let deliver_at = schedule::optimal_delivery_time(
            request.urgency,
            request.immediate,
            now,
            offset,
            pattern.as_ref(),
            &self.config,
        );
        let channels =
            channels::select_channels(request.urgency, preferences.as_ref(), &performance);

        tracing::debug!(
            user_id = %user_id,
            score,
            urgency = %request.urgency,
            deliver_at = %deliver_at,
            channels = ?channels,
            "Enhanced notification"
        );

        EnhancedNotification {
            id: NotificationId::new(),
            user_id,
            event_type: request.event_type.clone(),
            category: request.category.clone(),
            urgency: request.urgency,
            score,
            priority: PriorityTier::from_score(score),
            content,
            channels,
            created_at: now,
            deliver_at,
            metadata: request.metadata.clone(),
        }
    }
}

/// UTC fallback offset when the timezone port has no answer.
fn utc_offset() -> FixedOffset {
    chrono::Utc.fix()
}

/// Collapse a fallible optional lookup into an option, logging failures.
fn degraded<T>(result: AppResult<Option<T>>, user_id: UserId, lookup: &str) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(error) => {
            warn!(user_id = %user_id, lookup, error = %error,
                "Directory lookup failed, using defaults");
            None
        }
    }
}
