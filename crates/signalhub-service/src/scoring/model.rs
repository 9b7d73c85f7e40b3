//! Signal combination and adjustment.

use serde::{Deserialize, Serialize};

use signalhub_core::config::scoring::ScoreWeights;

/// Lower bound for a single adjustment factor.
const ADJUSTMENT_MIN: f64 = 0.7;
/// Upper bound for a single adjustment factor.
const ADJUSTMENT_MAX: f64 = 1.3;

/// The five signal values computed for one notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Urgency signal.
    pub urgency: f64,
    /// Relevance signal.
    pub relevance: f64,
    /// Engagement signal.
    pub engagement: f64,
    /// Timing signal.
    pub timing: f64,
    /// Frequency signal.
    pub frequency: f64,
}

impl ScoreBreakdown {
    /// Weighted combination of the signals.
    pub fn weighted(&self, weights: &ScoreWeights) -> f64 {
        self.urgency * weights.urgency
            + self.relevance * weights.relevance
            + self.engagement * weights.engagement
            + self.timing * weights.timing
            + self.frequency * weights.frequency
    }
}

/// Apply the host's adjustment factors to a weighted base score.
///
/// Each factor is clamped to [0.7, 1.3] before multiplying; the result
/// is clamped to [0, 1].
pub fn apply_adjustments(base: f64, factors: [f64; 3]) -> f64 {
    factors
        .iter()
        .fold(base, |acc, factor| {
            acc * factor.clamp(ADJUSTMENT_MIN, ADJUSTMENT_MAX)
        })
        .clamp(0.0, 1.0)
}
