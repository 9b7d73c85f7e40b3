//! Dispatcher runner — drains the delivery queue on a fixed tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use signalhub_core::config::dispatcher::DispatcherConfig;
use signalhub_core::traits::clock::Clock;
use signalhub_core::traits::monitor::DeliveryMonitor;
use signalhub_core::AppResult;
use signalhub_entity::history::HistoryEntry;
use signalhub_entity::notification::model::EnhancedNotification;
use signalhub_service::history::HistoryStore;

use crate::executor::DeliveryExecutor;
use crate::queue::DeliveryQueue;

/// Single-consumer dispatch loop.
///
/// Each tick takes everything due from the queue in dispatch order,
/// fans each item out to its channels, and appends a history entry.
/// Items leave the queue whether or not individual channel attempts
/// succeed; failures go to the monitor. Items enqueued while a tick is
/// running become visible on the next tick.
#[derive(Debug)]
pub struct DispatcherRunner {
    /// The pending set to drain.
    queue: Arc<DeliveryQueue>,
    /// Channel fan-out.
    executor: Arc<DeliveryExecutor>,
    /// Delivery log, written once per dispatched item.
    history: Arc<HistoryStore>,
    /// Failure sink.
    monitor: Arc<dyn DeliveryMonitor>,
    /// Time source.
    clock: Arc<dyn Clock>,
    /// Tick settings.
    config: DispatcherConfig,
}

impl DispatcherRunner {
    /// Create a new dispatcher runner.
    pub fn new(
        queue: Arc<DeliveryQueue>,
        executor: Arc<DeliveryExecutor>,
        history: Arc<HistoryStore>,
        monitor: Arc<dyn DeliveryMonitor>,
        clock: Arc<dyn Clock>,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            queue,
            executor,
            history,
            monitor,
            clock,
            config,
        }
    }

    /// Run the tick loop until the cancel signal is received.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        let tick_interval = Duration::from_secs(self.config.tick_interval_seconds.max(1));
        tracing::info!(
            interval_seconds = tick_interval.as_secs(),
            "Dispatcher started"
        );

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("Dispatcher received shutdown signal");
                        break;
                    }
                }
                _ = time::sleep(tick_interval) => {
                    if let Err(error) = self.tick().await {
                        self.monitor.tick_failed(&error);
                    }
                }
            }
        }

        tracing::info!("Dispatcher shut down");
    }

    /// One queue-draining step. Public so tests and hosts can single-step
    /// the dispatcher deterministically instead of waiting on timers.
    pub async fn tick(&self) -> AppResult<usize> {
        let now = self.clock.now();
        let due = self.queue.take_due(now).await;
        let count = due.len();

        for notification in &due {
            self.deliver(notification).await;
        }

        if count > 0 {
            tracing::debug!(delivered = count, "Dispatcher tick complete");
        }
        Ok(count)
    }

    /// Fan one notification out and record the delivery.
    async fn deliver(&self, notification: &EnhancedNotification) {
        let outcomes = self.executor.dispatch(notification).await;
        for (channel, outcome) in &outcomes {
            if let Err(error) = outcome {
                self.monitor.channel_failed(notification.id, *channel, error);
            }
        }

        self.history.record(
            notification.user_id,
            HistoryEntry {
                notification_id: notification.id,
                event_type: notification.event_type.clone(),
                category: notification.category.clone(),
                delivered_at: self.clock.now(),
                delivered: true,
                engaged: false,
            },
        );

        tracing::debug!(
            id = %notification.id,
            user_id = %notification.user_id,
            channels = ?notification.channels,
            "Notification dispatched"
        );
    }
}
