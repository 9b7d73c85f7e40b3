//! Delivery monitoring port.

use crate::error::AppError;
use crate::types::channel::Channel;
use crate::types::id::NotificationId;

/// Sink for delivery failures and tick-level errors.
///
/// Failures reported here never affect control flow: a failed channel
/// send does not fail sibling channels or re-queue the item. The host
/// can forward reports to its own monitoring system.
pub trait DeliveryMonitor: Send + Sync + std::fmt::Debug + 'static {
    /// A single channel attempt failed for a notification.
    fn channel_failed(&self, notification_id: NotificationId, channel: Channel, error: &AppError);

    /// A dispatcher tick failed as a whole.
    fn tick_failed(&self, error: &AppError);
}

/// Default monitor that reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMonitor;

impl DeliveryMonitor for LogMonitor {
    fn channel_failed(&self, notification_id: NotificationId, channel: Channel, error: &AppError) {
        tracing::error!(
            notification_id = %notification_id,
            channel = %channel,
            error = %error,
            "Channel delivery failed"
        );
    }

    fn tick_failed(&self, error: &AppError) {
        tracing::error!(error = %error, "Dispatcher tick failed");
    }
}
