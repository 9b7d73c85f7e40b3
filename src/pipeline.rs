//! The public pipeline facade and its builder.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use signalhub_core::config::PipelineConfig;
use signalhub_core::traits::clock::{Clock, SystemClock};
use signalhub_core::traits::directory::UserDirectory;
use signalhub_core::traits::monitor::{DeliveryMonitor, LogMonitor};
use signalhub_core::traits::scoring::{NeutralHooks, ScoringHooks};
use signalhub_core::types::channel::Channel;
use signalhub_core::types::id::{NotificationId, UserId};
use signalhub_core::AppResult;
use signalhub_entity::notification::request::NotificationRequest;
use signalhub_service::enhance::Enhancer;
use signalhub_service::history::HistoryStore;
use signalhub_service::inbox::{InboxEntry, InboxStore};
use signalhub_worker::channels::{InAppSender, NoopSender};
use signalhub_worker::dispatcher::DispatcherRunner;
use signalhub_worker::executor::{ChannelSender, DeliveryExecutor};
use signalhub_worker::queue::{DeliveryQueue, QueueStats};

/// The assembled notification pipeline.
///
/// Constructed through [`NotificationPipeline::builder`]; owns the
/// queue, the history log, and the in-app inbox. All shared state is
/// mutated only through this facade and the dispatcher.
#[derive(Debug)]
pub struct NotificationPipeline {
    /// Request enhancement (scoring, personalization, scheduling).
    enhancer: Enhancer,
    /// Pending notifications awaiting dispatch.
    queue: Arc<DeliveryQueue>,
    /// Per-user delivery history.
    history: Arc<HistoryStore>,
    /// Per-user in-app inboxes.
    inbox: Arc<InboxStore>,
    /// The dispatch loop.
    dispatcher: Arc<DispatcherRunner>,
    /// Time source, shared with every component.
    clock: Arc<dyn Clock>,
}

impl NotificationPipeline {
    /// Start building a pipeline around the host's user directory.
    pub fn builder(directory: Arc<dyn UserDirectory>) -> PipelineBuilder {
        PipelineBuilder::new(directory)
    }

    /// Validate, enhance, and enqueue a notification.
    ///
    /// Returns the generated id immediately; delivery happens on a
    /// later dispatcher tick. The only caller-visible error is request
    /// validation — missing recipient data never fails a send.
    pub async fn send(&self, request: NotificationRequest) -> AppResult<NotificationId> {
        request.validate()?;

        let enhanced = self.enhancer.enhance(&request).await;
        let id = enhanced.id;
        tracing::info!(
            id = %id,
            user_id = %request.user_id,
            urgency = %request.urgency,
            priority = %enhanced.priority,
            "Notification accepted"
        );
        self.queue.enqueue(enhanced).await;
        Ok(id)
    }

    /// Cancel a pending notification.
    ///
    /// Returns `true` if it was removed before delivery; `false` once
    /// delivered or unknown.
    pub async fn cancel(&self, id: NotificationId) -> bool {
        self.queue.cancel(id).await
    }

    /// Mark a delivered notification as engaged. Idempotent.
    pub fn mark_engaged(&self, user_id: UserId, id: NotificationId) -> bool {
        self.history.mark_engaged(user_id, id)
    }

    /// The user's most recent in-app notifications, newest first.
    pub fn user_notifications(&self, user_id: UserId, limit: usize) -> Vec<InboxEntry> {
        self.inbox.list(user_id, limit)
    }

    /// Count of unread in-app notifications.
    pub fn unread_count(&self, user_id: UserId) -> usize {
        self.inbox.unread_count(user_id)
    }

    /// Mark an in-app notification as read.
    pub fn mark_read(&self, user_id: UserId, id: NotificationId) -> bool {
        self.inbox.mark_read(user_id, id)
    }

    /// Remove all of the user's in-app notifications.
    pub fn clear_notifications(&self, user_id: UserId) -> usize {
        self.inbox.clear(user_id)
    }

    /// Run one dispatcher step against the current clock.
    ///
    /// Hosts normally use [`spawn`](Self::spawn); `tick` exists so
    /// tests and simulations can step deterministically.
    pub async fn tick(&self) -> AppResult<usize> {
        self.dispatcher.tick().await
    }

    /// Queue counters at the current instant.
    pub async fn queue_stats(&self) -> QueueStats {
        self.queue.stats(self.clock.now()).await
    }

    /// Start the dispatcher loop on the current tokio runtime.
    pub fn spawn(&self) -> PipelineHandle {
        let (shutdown, cancel) = watch::channel(false);
        let dispatcher = Arc::clone(&self.dispatcher);
        let task = tokio::spawn(async move {
            dispatcher.run(cancel).await;
        });
        PipelineHandle { shutdown, task }
    }
}

/// Handle to a running dispatcher loop.
#[derive(Debug)]
pub struct PipelineHandle {
    /// Shutdown signal sender.
    shutdown: watch::Sender<bool>,
    /// The dispatcher task.
    task: JoinHandle<()>,
}

impl PipelineHandle {
    /// Signal the dispatcher to stop and wait for it to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(error) = self.task.await {
            tracing::error!(error = %error, "Dispatcher task did not shut down cleanly");
        }
    }
}

/// Builder wiring injected ports into a [`NotificationPipeline`].
pub struct PipelineBuilder {
    config: PipelineConfig,
    directory: Arc<dyn UserDirectory>,
    hooks: Arc<dyn ScoringHooks>,
    clock: Arc<dyn Clock>,
    monitor: Arc<dyn DeliveryMonitor>,
    senders: Vec<Arc<dyn ChannelSender>>,
}

impl PipelineBuilder {
    fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            config: PipelineConfig::default(),
            directory,
            hooks: Arc::new(NeutralHooks),
            clock: Arc::new(SystemClock),
            monitor: Arc::new(LogMonitor),
            senders: Vec::new(),
        }
    }

    /// Use the given configuration instead of the defaults.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Install scoring adjustment hooks.
    pub fn with_hooks(mut self, hooks: Arc<dyn ScoringHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Use a custom time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Install a delivery monitor.
    pub fn with_monitor(mut self, monitor: Arc<dyn DeliveryMonitor>) -> Self {
        self.monitor = monitor;
        self
    }

    /// Register a channel sender, overriding the built-in for that
    /// channel.
    pub fn with_sender(mut self, sender: Arc<dyn ChannelSender>) -> Self {
        self.senders.push(sender);
        self
    }

    /// Assemble the pipeline.
    pub fn build(self) -> NotificationPipeline {
        let history = Arc::new(HistoryStore::new(self.config.history.clone()));
        let inbox = Arc::new(InboxStore::new());
        let queue = Arc::new(DeliveryQueue::new());

        let mut executor = DeliveryExecutor::new();
        for sender in self.senders {
            executor.register(sender);
        }
        if !executor.has_sender(Channel::InApp) {
            executor.register(Arc::new(InAppSender::new(
                Arc::clone(&inbox),
                Arc::clone(&self.clock),
            )));
        }
        for channel in [Channel::Email, Channel::Sms, Channel::Push] {
            if !executor.has_sender(channel) {
                executor.register(Arc::new(NoopSender::new(channel)));
            }
        }

        let enhancer = Enhancer::new(
            self.directory,
            self.hooks,
            Arc::clone(&history),
            Arc::clone(&self.clock),
            self.config.scoring.clone(),
        );

        let dispatcher = Arc::new(DispatcherRunner::new(
            Arc::clone(&queue),
            Arc::new(executor),
            Arc::clone(&history),
            self.monitor,
            Arc::clone(&self.clock),
            self.config.dispatcher.clone(),
        ));

        NotificationPipeline {
            enhancer,
            queue,
            history,
            inbox,
            dispatcher,
            clock: self.clock,
        }
    }
}
