//! Scoring and scheduling configuration.

use serde::{Deserialize, Serialize};

/// Scoring model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weights for the signal combination. Defaults sum to 1.0.
    #[serde(default)]
    pub weights: ScoreWeights,
    /// Peak hour (0-23, recipient-local) used when no activity pattern
    /// is available.
    #[serde(default = "default_peak_hour")]
    pub default_peak_hour: u32,
    /// Maximum deferral in hours for a scheduled delivery.
    #[serde(default = "default_max_defer")]
    pub max_defer_hours: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            default_peak_hour: default_peak_hour(),
            max_defer_hours: default_max_defer(),
        }
    }
}

/// Weights applied to the five scoring signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the urgency signal.
    #[serde(default = "default_urgency")]
    pub urgency: f64,
    /// Weight of the relevance signal.
    #[serde(default = "default_relevance")]
    pub relevance: f64,
    /// Weight of the engagement signal.
    #[serde(default = "default_engagement")]
    pub engagement: f64,
    /// Weight of the timing signal.
    #[serde(default = "default_timing")]
    pub timing: f64,
    /// Weight of the frequency signal.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            urgency: default_urgency(),
            relevance: default_relevance(),
            engagement: default_engagement(),
            timing: default_timing(),
            frequency: default_frequency(),
        }
    }
}

fn default_peak_hour() -> u32 {
    10
}

fn default_max_defer() -> i64 {
    24
}

fn default_urgency() -> f64 {
    0.30
}

fn default_relevance() -> f64 {
    0.25
}

fn default_engagement() -> f64 {
    0.20
}

fn default_timing() -> f64 {
    0.15
}

fn default_frequency() -> f64 {
    0.10
}
