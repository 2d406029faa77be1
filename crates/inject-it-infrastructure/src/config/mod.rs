//! Configuration
//!
//! [`AppConfig`] is loaded by [`ConfigLoader`] and turned into the
//! [`RunRequest`](inject_it_domain::RunRequest) the engine consumes.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, LoadedConfig};
pub use types::{AppConfig, LoggingConfig, MigrationConfig, ProjectConfig};
