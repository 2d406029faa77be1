//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values, using Figment.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use inject_it_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration together with the file it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// Merged configuration, not yet validated
    pub config: AppConfig,
    /// TOML file merged into the defaults, if any
    pub source: Option<PathBuf>,
}

/// Configuration loader service
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file: the explicit path, else the first default location found
    /// 3. Environment variables with prefix, `__` between nested keys
    ///    (e.g., `INJECT_IT_MIGRATION__ACCESSOR_FUNCTION`)
    ///
    /// The result is not validated; callers validate once their own
    /// overrides are applied, see [`validate_app_config`].
    pub fn load(&self) -> Result<LoadedConfig> {
        let source = self.source_path()?;

        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));
        if let Some(path) = &source {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR),
        );

        let config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("Failed to extract configuration", e))?;

        Ok(LoadedConfig { config, source })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), to_toml(config)?)
            .map_err(|e| Error::config_with_source("Failed to write config file", e))
    }

    /// The explicit configuration file, or the first existing default one
    fn source_path(&self) -> Result<Option<PathBuf>> {
        match &self.config_path {
            Some(path) if !path.exists() => Err(Error::config(format!(
                "Configuration file not found: {}",
                path.display()
            ))),
            Some(path) => Ok(Some(path.clone())),
            None => Ok(Self::find_default_config_path()),
        }
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Render a configuration as pretty TOML
pub fn to_toml(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| Error::config_with_source("Failed to serialize config to TOML", e))
}

/// Validate application configuration
///
/// Run once, after command-line overrides are applied.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_project_config(config)?;
    validate_migration_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_project_config(config: &AppConfig) -> Result<()> {
    if config.project.include.is_empty() {
        return Err(Error::config("Include patterns cannot be empty"));
    }
    Ok(())
}

fn validate_migration_config(config: &AppConfig) -> Result<()> {
    let migration = &config.migration;
    if migration.accessor_module.trim().is_empty() {
        return Err(Error::config("Accessor module cannot be empty"));
    }
    if !is_identifier(&migration.accessor_function) {
        return Err(Error::config(format!(
            "Accessor function '{}' is not a valid identifier",
            migration.accessor_function
        )));
    }
    if migration.class_name_pattern.is_empty() {
        return Err(Error::config("Class name pattern cannot be empty"));
    }
    Ok(())
}

/// ECMAScript identifier, ASCII subset
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
