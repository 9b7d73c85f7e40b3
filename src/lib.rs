//! # SignalHub
//!
//! Risk-scored, priority-ordered notification delivery pipeline.
//!
//! The host application submits raw [`NotificationRequest`]s; the
//! pipeline scores them against the recipient's profile and history,
//! personalizes the content, schedules delivery, selects channels, and
//! drains the queue on a periodic dispatcher tick.
//!
//! ```no_run
//! use std::sync::Arc;
//! use signalhub::{NotificationPipeline, NotificationRequest, UserId, Urgency};
//! # use signalhub::UserDirectory;
//! # async fn example(directory: Arc<dyn UserDirectory>) -> signalhub::AppResult<()> {
//! let pipeline = Arc::new(NotificationPipeline::builder(directory).build());
//! let handle = pipeline.spawn();
//!
//! let id = pipeline
//!     .send(
//!         NotificationRequest::new(UserId::new(), "job", "jobs", "New job, {name}!")
//!             .with_urgency(Urgency::High),
//!     )
//!     .await?;
//! tracing::info!(%id, "queued");
//!
//! handle.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod logging;
pub mod pipeline;

pub use pipeline::{NotificationPipeline, PipelineBuilder, PipelineHandle};

pub use signalhub_core::config::PipelineConfig;
pub use signalhub_core::traits::{
    Clock, DeliveryMonitor, LogMonitor, ManualClock, NeutralHooks, ScoringHooks, SystemClock,
    UserDirectory,
};
pub use signalhub_core::types::{
    ActivityPattern, Channel, ChannelPreferences, ContentPreferences, NotificationId, Tone,
    UserId, UserProfile, UserRole,
};
pub use signalhub_core::error::ErrorKind;
pub use signalhub_core::{AppError, AppResult};
pub use signalhub_entity::{
    EnhancedNotification, HistoryEntry, NotificationRequest, PriorityTier, Urgency,
};
pub use signalhub_service::inbox::InboxEntry;
pub use signalhub_worker::{ChannelSender, QueueStats};
