//! Tracing bootstrap for hosts that want the pipeline's defaults.

use tracing_subscriber::{fmt, EnvFilter};

use signalhub_core::config::logging::LoggingConfig;

/// Initialize the global tracing subscriber from logging configuration.
///
/// The `RUST_LOG` environment variable wins over the configured level.
/// Safe to call when the host has already installed a subscriber; the
/// existing one is kept.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        _ => fmt().pretty().with_env_filter(filter).with_target(true).try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed, keeping it");
    }
}
