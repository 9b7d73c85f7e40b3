//! Delivery channel enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A delivery medium for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// The in-application notification center.
    InApp,
    /// Email delivery.
    Email,
    /// SMS delivery.
    Sms,
    /// Mobile push delivery.
    Push,
}

impl Channel {
    /// All channels, in default candidate order.
    pub fn all() -> [Channel; 4] {
        [Self::InApp, Self::Email, Self::Sms, Self::Push]
    }

    /// Return the channel as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InApp => "in_app",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
