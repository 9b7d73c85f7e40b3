//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

/// Dispatcher tick loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Whether the dispatcher loop is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval in seconds between queue-draining ticks.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_seconds: u64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_seconds: default_tick_interval(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_interval() -> u64 {
    1
}
