//! # signalhub-worker
//!
//! Dispatch machinery for SignalHub:
//! - An in-memory delivery queue ordered critical-first, then by score
//! - A channel sender trait and an executor that fans a notification
//!   out to all of its channels concurrently
//! - Built-in senders: in-app (inbox-backed) and no-ops for transports
//!   the host has not wired up
//! - A dispatcher runner that drains due items on a fixed tick

pub mod channels;
pub mod dispatcher;
pub mod executor;
pub mod queue;

pub use dispatcher::DispatcherRunner;
pub use executor::{ChannelSender, DeliveryExecutor};
pub use queue::{DeliveryQueue, QueueStats};
