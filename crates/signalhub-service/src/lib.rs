//! # signalhub-service
//!
//! The scoring model, the enhancer that turns raw requests into
//! deliverable notifications, and the in-memory history and inbox
//! stores.

pub mod enhance;
pub mod history;
pub mod inbox;
pub mod scoring;

pub use enhance::Enhancer;
pub use history::HistoryStore;
pub use inbox::{InboxEntry, InboxStore};
