//! # inject-it infrastructure
//!
//! Cross-cutting concerns around the migration engine:
//!
//! - [`config`] - layered configuration (defaults, TOML file, environment)
//! - [`logging`] - `tracing` subscriber setup
//! - [`progress`] - a [`ProgressSink`](inject_it_domain::ProgressSink) that logs

pub mod config;
pub mod constants;
pub mod logging;
pub mod progress;

pub use config::{
    AppConfig, ConfigLoader, LoadedConfig, LoggingConfig, MigrationConfig, ProjectConfig,
};
pub use logging::{init_logging, log_config_source, parse_log_level};
pub use progress::TracingProgressSink;
