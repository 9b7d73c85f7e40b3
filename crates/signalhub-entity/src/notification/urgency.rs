//! Urgency enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller-declared urgency of a notification.
///
/// Urgency drives the strongest scoring signal, forces the channel set
/// for the extremes, and makes critical items bypass delivery
/// scheduling entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Delivered immediately on every forced channel.
    Critical,
    /// Elevated attention.
    High,
    /// The default when the caller does not say.
    #[default]
    Medium,
    /// Low attention.
    Low,
    /// Informational only.
    Info,
}

impl Urgency {
    /// The urgency signal contribution in [0,1].
    pub fn base_score(&self) -> f64 {
        match self {
            Self::Critical => 1.0,
            Self::High => 0.8,
            Self::Medium => 0.5,
            Self::Low => 0.2,
            Self::Info => 0.1,
        }
    }

    /// Whether this urgency bypasses delivery scheduling.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Return the urgency as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = signalhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "info" => Ok(Self::Info),
            _ => Err(signalhub_core::AppError::validation(format!(
                "Invalid urgency: '{s}'. Expected one of: critical, high, medium, low, info"
            ))),
        }
    }
}
