//! In-app channel sender backed by the inbox store.

use std::sync::Arc;

use async_trait::async_trait;

use signalhub_core::traits::clock::Clock;
use signalhub_core::types::channel::Channel;
use signalhub_core::AppResult;
use signalhub_entity::notification::model::EnhancedNotification;
use signalhub_service::inbox::InboxStore;

use crate::executor::ChannelSender;

/// Delivers notifications into the per-user in-app inbox.
///
/// This is the one channel with a real built-in transport; it is what
/// `user_notifications` reads back.
#[derive(Debug)]
pub struct InAppSender {
    /// The inbox store shared with the pipeline facade.
    inbox: Arc<InboxStore>,
    /// Time source for the delivery timestamp.
    clock: Arc<dyn Clock>,
}

impl InAppSender {
    /// Create a sender writing into the given inbox.
    pub fn new(inbox: Arc<InboxStore>, clock: Arc<dyn Clock>) -> Self {
        Self { inbox, clock }
    }
}

#[async_trait]
impl ChannelSender for InAppSender {
    fn channel(&self) -> Channel {
        Channel::InApp
    }

    async fn deliver(&self, notification: &EnhancedNotification) -> AppResult<()> {
        self.inbox.push(notification.clone(), self.clock.now());
        tracing::debug!(
            id = %notification.id,
            user_id = %notification.user_id,
            "Delivered to in-app inbox"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use signalhub_core::traits::clock::SystemClock;
    use signalhub_core::types::id::{NotificationId, UserId};
    use signalhub_entity::notification::priority::PriorityTier;
    use signalhub_entity::notification::urgency::Urgency;

    #[tokio::test]
    async fn test_deliver_lands_in_inbox() {
        let inbox = Arc::new(InboxStore::new());
        let sender = InAppSender::new(Arc::clone(&inbox), Arc::new(SystemClock));
        let user_id = UserId::new();

        let notification = EnhancedNotification {
            id: NotificationId::new(),
            user_id,
            event_type: "job".to_string(),
            category: "jobs".to_string(),
            urgency: Urgency::Medium,
            score: 0.5,
            priority: PriorityTier::Low,
            content: "hello".to_string(),
            channels: vec![Channel::InApp],
            created_at: Utc::now(),
            deliver_at: Utc::now(),
            metadata: None,
        };

        sender.deliver(&notification).await.unwrap();
        let listed = inbox.list(user_id, 10);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].notification.id, notification.id);
    }
}
