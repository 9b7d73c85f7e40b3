//! No-op sender for transports the host has not wired up.

use async_trait::async_trait;

use signalhub_core::types::channel::Channel;
use signalhub_core::AppResult;
use signalhub_entity::notification::model::EnhancedNotification;

use crate::executor::ChannelSender;

/// Accepts every delivery without doing anything.
///
/// Installed for email/SMS/push when the host supplies no sender, so
/// best-effort fan-out still settles cleanly.
#[derive(Debug, Clone, Copy)]
pub struct NoopSender {
    /// The channel this sender stands in for.
    channel: Channel,
}

impl NoopSender {
    /// Create a no-op sender for a channel.
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ChannelSender for NoopSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn deliver(&self, notification: &EnhancedNotification) -> AppResult<()> {
        tracing::debug!(
            id = %notification.id,
            channel = %self.channel,
            "No transport configured, delivery dropped"
        );
        Ok(())
    }
}
