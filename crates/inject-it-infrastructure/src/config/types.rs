//! Configuration types

use crate::constants::{DEFAULT_EXCLUDE_PATTERNS, DEFAULT_LOG_LEVEL, DEFAULT_PROJECT_ROOT};
use inject_it_domain::RunRequest;
use inject_it_domain::constants::{
    DEFAULT_ACCESSOR_FUNCTION, DEFAULT_ACCESSOR_MODULE, DEFAULT_CLASS_FILES_PATTERN,
    DEFAULT_CLASS_NAME_PATTERN,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which files make up the project
    pub project: ProjectConfig,

    /// What to migrate and how
    pub migration: MigrationConfig,

    /// Logging
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Run request described by this configuration
    pub fn to_run_request(&self) -> RunRequest {
        RunRequest::new(&self.project.root)
            .with_file_patterns(self.project.include.iter().cloned())
            .with_exclude_patterns(self.project.exclude.iter().cloned())
            .with_class_name_pattern(&self.migration.class_name_pattern)
            .with_accessor(
                &self.migration.accessor_module,
                &self.migration.accessor_function,
            )
            .with_class_files(&self.migration.class_files)
            .with_dry_run(self.migration.dry_run)
    }
}

/// Project tree configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project root directory
    pub root: PathBuf,

    /// Globs over root-relative paths selecting files to load
    pub include: Vec<String>,

    /// Globs over root-relative paths excluded from loading
    pub exclude: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_PROJECT_ROOT),
            include: vec![DEFAULT_CLASS_FILES_PATTERN.to_string()],
            exclude: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|pattern| (*pattern).to_string())
                .collect(),
        }
    }
}

/// Migration configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Glob restricting which files' classes are migrated
    pub class_files: String,

    /// Glob over class names
    pub class_name_pattern: String,

    /// Module the accessor function is imported from
    pub accessor_module: String,

    /// Accessor function name
    pub accessor_function: String,

    /// Plan and preview without writing
    pub dry_run: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            class_files: DEFAULT_CLASS_FILES_PATTERN.to_string(),
            class_name_pattern: DEFAULT_CLASS_NAME_PATTERN.to_string(),
            accessor_module: DEFAULT_ACCESSOR_MODULE.to_string(),
            accessor_function: DEFAULT_ACCESSOR_FUNCTION.to_string(),
            dry_run: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
