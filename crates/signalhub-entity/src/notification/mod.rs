//! Notification domain entities.

pub mod model;
pub mod priority;
pub mod request;
pub mod urgency;

pub use model::EnhancedNotification;
pub use priority::PriorityTier;
pub use request::NotificationRequest;
pub use urgency::Urgency;
