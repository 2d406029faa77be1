//! Infrastructure layer constants
//!
//! Domain defaults (accessor, class patterns) are defined in
//! `inject_it_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "inject-it.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "inject-it";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INJECT_IT";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// PROJECT CONSTANTS
// ============================================================================

/// Project root when none is configured
pub const DEFAULT_PROJECT_ROOT: &str = ".";

/// Paths never loaded unless the exclude list is overridden
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["**/node_modules/**", "**/*.d.ts", "**/dist/**"];

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "INJECT_IT_LOG";
