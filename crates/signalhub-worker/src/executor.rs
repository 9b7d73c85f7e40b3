//! Channel fan-out — dispatches a notification to its channel senders.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use signalhub_core::types::channel::Channel;
use signalhub_core::{AppError, AppResult};
use signalhub_entity::notification::model::EnhancedNotification;

/// Trait for channel sender implementations.
///
/// A sender owns its transport and its error containment: a returned
/// error is reported to the monitor but never affects sibling channels
/// or re-queues the notification.
#[async_trait]
pub trait ChannelSender: Send + Sync + std::fmt::Debug + 'static {
    /// The channel this sender delivers on.
    fn channel(&self) -> Channel;

    /// Attempt delivery of the notification on this channel.
    async fn deliver(&self, notification: &EnhancedNotification) -> AppResult<()>;
}

/// Dispatches notifications to the appropriate senders by channel.
#[derive(Debug, Default)]
pub struct DeliveryExecutor {
    /// Registered senders by channel.
    senders: HashMap<Channel, Arc<dyn ChannelSender>>,
}

impl DeliveryExecutor {
    /// Create a new executor with no senders registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel sender, replacing any previous one.
    pub fn register(&mut self, sender: Arc<dyn ChannelSender>) {
        let channel = sender.channel();
        tracing::info!(channel = %channel, "Registered channel sender");
        self.senders.insert(channel, sender);
    }

    /// Check if a sender is registered for a channel.
    pub fn has_sender(&self, channel: Channel) -> bool {
        self.senders.contains_key(&channel)
    }

    /// The channels with a registered sender.
    pub fn registered_channels(&self) -> Vec<Channel> {
        self.senders.keys().copied().collect()
    }

    /// Fan the notification out to every one of its channels
    /// concurrently, waiting for all attempts to settle.
    ///
    /// Returns the per-channel outcomes; a missing sender counts as a
    /// delivery failure for that channel.
    pub async fn dispatch(
        &self,
        notification: &EnhancedNotification,
    ) -> Vec<(Channel, AppResult<()>)> {
        let attempts = notification.channels.iter().map(|&channel| async move {
            let outcome = match self.senders.get(&channel) {
                Some(sender) => sender.deliver(notification).await,
                None => Err(AppError::delivery(format!(
                    "No sender registered for channel '{channel}'"
                ))),
            };
            (channel, outcome)
        });

        join_all(attempts).await
    }
}
