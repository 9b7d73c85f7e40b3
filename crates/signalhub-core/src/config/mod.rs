//! Pipeline configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Every field carries a serde default so the pipeline
//! can be constructed with no configuration files at all.

pub mod dispatcher;
pub mod history;
pub mod logging;
pub mod scoring;

use serde::{Deserialize, Serialize};

use self::dispatcher::DispatcherConfig;
use self::history::HistoryConfig;
use self::logging::LoggingConfig;
use self::scoring::ScoringConfig;

use crate::error::AppError;

/// Root pipeline configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay) and
/// `SIGNALHUB_`-prefixed environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Dispatcher tick settings.
    #[serde(default)]
    pub dispatcher: DispatcherConfig,
    /// Scoring weights and scheduling defaults.
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// History store bounds.
    #[serde(default)]
    pub history: HistoryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PipelineConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific
    /// overlay and environment variables prefixed with `SIGNALHUB_`.
    /// Missing files are not an error; every field has a default.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SIGNALHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_complete() {
        let config = PipelineConfig::default();
        assert_eq!(config.dispatcher.tick_interval_seconds, 1);
        assert_eq!(config.history.max_entries_per_user, 1000);
        let sum = config.scoring.weights.urgency
            + config.scoring.weights.relevance
            + config.scoring.weights.engagement
            + config.scoring.weights.timing
            + config.scoring.weights.frequency;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_empty_json() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.scoring.default_peak_hour, 10);
    }
}
