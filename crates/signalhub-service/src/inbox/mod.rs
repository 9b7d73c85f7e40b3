//! In-app notification inbox.

pub mod store;

pub use store::{InboxEntry, InboxStore};
