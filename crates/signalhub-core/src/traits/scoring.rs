//! Pluggable scoring adjustment hooks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::types::id::UserId;

/// Port for the adjustment factors applied after the weighted signal
/// combination.
///
/// Each factor is expected to stay near 1.0; the scoring model clamps
/// returned values to [0.7, 1.3] before multiplying, and the final score
/// is clamped to [0, 1] regardless.
#[async_trait]
pub trait ScoringHooks: Send + Sync + std::fmt::Debug + 'static {
    /// Historical success rate factor for an event type.
    async fn success_rate(&self, event_type: &str) -> f64;

    /// Per-user behavioral adjustment for a category.
    async fn behavior_adjustment(&self, user_id: UserId, category: &str) -> f64;

    /// Time-of-day adjustment.
    async fn time_adjustment(&self, at: DateTime<Utc>) -> f64;
}

/// Neutral hook implementation: every factor is exactly 1.0, leaving the
/// weighted score untouched. This is the default when the host supplies
/// no hooks of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralHooks;

#[async_trait]
impl ScoringHooks for NeutralHooks {
    async fn success_rate(&self, _event_type: &str) -> f64 {
        1.0
    }

    async fn behavior_adjustment(&self, _user_id: UserId, _category: &str) -> f64 {
        1.0
    }

    async fn time_adjustment(&self, _at: DateTime<Utc>) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_neutral_hooks_are_identity() {
        let hooks = NeutralHooks;
        assert_eq!(hooks.success_rate("job").await, 1.0);
        assert_eq!(hooks.behavior_adjustment(UserId::new(), "jobs").await, 1.0);
        assert_eq!(hooks.time_adjustment(Utc::now()).await, 1.0);
    }
}
