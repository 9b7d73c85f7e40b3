//! Per-user delivery history.

pub mod store;

pub use store::HistoryStore;
