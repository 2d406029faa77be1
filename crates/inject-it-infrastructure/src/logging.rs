//! Structured logging with tracing
//!
//! Logs go to stderr so stdout stays free for the run report. The
//! `INJECT_IT_LOG` environment variable overrides the configured level.

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;
use inject_it_domain::error::{Error, Result};
use std::path::Path;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Layer types differ, so each format gets its own branch
    let registry = Registry::default().with(filter);
    let initialized = if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        registry.with(layer).try_init()
    } else {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);
        registry.with(layer).try_init()
    };
    initialized.map_err(|e| Error::config_with_source("Failed to initialize logging", e))?;

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log which configuration file was used, once logging is up
pub fn log_config_source(source: Option<&Path>) {
    match source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => debug!("No configuration file found, using defaults and environment"),
    }
}
