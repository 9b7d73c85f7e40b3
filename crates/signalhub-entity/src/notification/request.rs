//! Parameters for submitting a notification.

use serde::{Deserialize, Serialize};

use signalhub_core::types::id::UserId;
use signalhub_core::types::role::UserRole;
use signalhub_core::{AppError, AppResult};

use super::urgency::Urgency;

/// A raw notification as submitted by the host application.
///
/// Immutable once submitted; the pipeline derives an
/// [`EnhancedNotification`](super::model::EnhancedNotification) from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// The recipient.
    pub user_id: UserId,
    /// Event type that triggered this notification
    /// (e.g., "job", "profile", "message").
    pub event_type: String,
    /// Category, matched against the recipient's interests.
    pub category: String,
    /// Caller-declared urgency; medium when absent.
    #[serde(default)]
    pub urgency: Urgency,
    /// Content template; may contain a `{name}` placeholder.
    pub content: String,
    /// Only relevant to recipients holding this role.
    pub target_role: Option<UserRole>,
    /// Location the event pertains to.
    pub location: Option<String>,
    /// Deliver immediately regardless of the recipient's peak hours.
    #[serde(default)]
    pub immediate: bool,
    /// Free-form structured payload passed through untouched.
    pub metadata: Option<serde_json::Value>,
}

impl NotificationRequest {
    /// Convenience constructor with unset optional fields.
    pub fn new(
        user_id: UserId,
        event_type: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            event_type: event_type.into(),
            category: category.into(),
            urgency: Urgency::default(),
            content: content.into(),
            target_role: None,
            location: None,
            immediate: false,
            metadata: None,
        }
    }

    /// Set the urgency.
    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    /// Mark for immediate delivery.
    pub fn immediate(mut self) -> Self {
        self.immediate = true;
        self
    }

    /// Validate the request before it enters the pipeline.
    pub fn validate(&self) -> AppResult<()> {
        if self.event_type.trim().is_empty() {
            return Err(AppError::validation("event_type must not be empty"));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::validation("content must not be empty"));
        }
        Ok(())
    }
}
