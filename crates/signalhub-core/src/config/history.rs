//! History store configuration.

use serde::{Deserialize, Serialize};

/// Bounds for the per-user delivery history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum retained entries per user; the oldest entry is evicted
    /// when the bound is exceeded.
    #[serde(default = "default_max_entries")]
    pub max_entries_per_user: usize,
    /// Trailing window in hours used by the frequency signal.
    #[serde(default = "default_frequency_window")]
    pub frequency_window_hours: i64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries_per_user: default_max_entries(),
            frequency_window_hours: default_frequency_window(),
        }
    }
}

fn default_max_entries() -> usize {
    1000
}

fn default_frequency_window() -> i64 {
    24
}
