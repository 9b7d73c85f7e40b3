//! Core ports defined in `signalhub-core` and implemented by the host
//! application (or by the built-in defaults).

pub mod clock;
pub mod directory;
pub mod monitor;
pub mod scoring;

pub use clock::{Clock, ManualClock, SystemClock};
pub use directory::UserDirectory;
pub use monitor::{DeliveryMonitor, LogMonitor};
pub use scoring::{NeutralHooks, ScoringHooks};
