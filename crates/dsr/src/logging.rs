//! Structured logging with tracing
//!
//! Configures the tracing subscriber once at startup. The `DSR_LOG`
//! environment variable overrides the configured level with a full
//! `EnvFilter` directive string.

use tracing::info;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dsr_domain::error::Result;

use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_env("DSR_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    // json_format branches separately: the layer types differ
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default().with(filter).with(stdout).init();
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default().with(filter).with(stdout).init();
    }

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}
