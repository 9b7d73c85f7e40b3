//! Built-in channel sender implementations.

pub mod in_app;
pub mod noop;

pub use in_app::InAppSender;
pub use noop::NoopSender;
