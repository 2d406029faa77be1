//! Domain layer constants
//!
//! Defaults for a migration request. Infrastructure-specific constants
//! (config file names, env prefixes) live in `inject_it_infrastructure::constants`.

// ============================================================================
// MIGRATION DEFAULTS
// ============================================================================

/// Module the accessor function is imported from
pub const DEFAULT_ACCESSOR_MODULE: &str = "@angular/core";

/// Call-based injection accessor
pub const DEFAULT_ACCESSOR_FUNCTION: &str = "inject";

/// Glob over class names selecting classes to migrate
pub const DEFAULT_CLASS_NAME_PATTERN: &str = "*Component";

/// Glob over root-relative paths of files whose classes are migrated
pub const DEFAULT_CLASS_FILES_PATTERN: &str = "**/*.ts";

// ============================================================================
// ANNOTATION NAMES
// ============================================================================

/// Decorator marking a dependency optional
pub const OPTIONAL_DECORATOR: &str = "Optional";

/// Decorator restricting resolution to the requesting injector
pub const SELF_DECORATOR: &str = "Self";

/// Decorator starting resolution at the parent injector
pub const SKIP_SELF_DECORATOR: &str = "SkipSelf";

/// Decorator starting resolution at the host element boundary
pub const HOST_DECORATOR: &str = "Host";

/// Decorator overriding the injection token
pub const INJECT_DECORATOR: &str = "Inject";

// ============================================================================
// SOURCE LAYOUT
// ============================================================================

/// Indentation unit added to a class's own indentation when a body has no members
pub const DEFAULT_MEMBER_INDENT: &str = "    ";
