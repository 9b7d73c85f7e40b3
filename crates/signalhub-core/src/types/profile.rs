//! Recipient profile value types resolved through the [`UserDirectory`]
//! port.
//!
//! These live in core rather than the entity crate because the port
//! traits reference them and core has no internal dependencies.
//!
//! [`UserDirectory`]: crate::traits::directory::UserDirectory

use serde::{Deserialize, Serialize};

use crate::types::channel::Channel;
use crate::types::role::UserRole;

/// A recipient profile used for relevance scoring and personalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name; the first whitespace-separated token substitutes
    /// the `{name}` placeholder in notification content.
    pub name: String,
    /// The recipient's platform role.
    pub role: UserRole,
    /// Free-form location string (city or district).
    pub location: Option<String>,
    /// Categories the recipient has expressed interest in.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Content rendering preferences.
    #[serde(default)]
    pub preferences: ContentPreferences,
}

impl UserProfile {
    /// The recipient's first name, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

/// Preferences applied when personalizing notification content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPreferences {
    /// BCP 47 language tag the recipient prefers.
    pub language: Option<String>,
    /// Preferred tone of voice.
    #[serde(default)]
    pub tone: Tone,
}

/// Tone of voice applied to personalized content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Leave the content as authored.
    #[default]
    Neutral,
    /// Formal register ("Hi" becomes "Dear", exclamations soften).
    Formal,
    /// Casual register (the inverse transform).
    Casual,
}

/// Observed activity pattern for a recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPattern {
    /// Hours of the day (0-23, recipient-local) the user is most active,
    /// most active first.
    #[serde(default)]
    pub peak_hours: Vec<u32>,
    /// ISO weekday numbers (1 = Monday) the user is typically active.
    #[serde(default)]
    pub active_days: Vec<u32>,
    /// Average session length in minutes.
    #[serde(default)]
    pub avg_session_minutes: u32,
}

/// Per-channel opt-in preferences. Every channel defaults to enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPreferences {
    /// In-app notification center.
    #[serde(default = "default_true")]
    pub in_app: bool,
    /// Email delivery.
    #[serde(default = "default_true")]
    pub email: bool,
    /// SMS delivery.
    #[serde(default = "default_true")]
    pub sms: bool,
    /// Mobile push delivery.
    #[serde(default = "default_true")]
    pub push: bool,
}

impl ChannelPreferences {
    /// Whether the given channel is opted in.
    pub fn allows(&self, channel: Channel) -> bool {
        match channel {
            Channel::InApp => self.in_app,
            Channel::Email => self.email,
            Channel::Sms => self.sms,
            Channel::Push => self.push,
        }
    }
}

impl Default for ChannelPreferences {
    fn default() -> Self {
        Self {
            in_app: true,
            email: true,
            sms: true,
            push: true,
        }
    }
}

fn default_true() -> bool {
    true
}
