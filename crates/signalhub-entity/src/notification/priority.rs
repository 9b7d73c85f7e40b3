//! Priority tier derived from the final score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse priority bucket derived from the continuous score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    /// Score >= 0.8.
    High,
    /// Score >= 0.6.
    Medium,
    /// Score >= 0.3.
    Low,
    /// Everything below.
    Info,
}

impl PriorityTier {
    /// Map a final score onto its tier. Pure and monotonic.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::High
        } else if score >= 0.6 {
            Self::Medium
        } else if score >= 0.3 {
            Self::Low
        } else {
            Self::Info
        }
    }

    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
