//! Run request and result

use crate::constants::{
    DEFAULT_ACCESSOR_FUNCTION, DEFAULT_ACCESSOR_MODULE, DEFAULT_CLASS_FILES_PATTERN,
    DEFAULT_CLASS_NAME_PATTERN,
};
use crate::error::Error;
use crate::value_objects::edit::{EditLog, FilePreview};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the orchestrator needs to run one migration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    /// Project root
    pub root: PathBuf,
    /// Globs (relative to `root`) selecting the files to load
    pub file_patterns: Vec<String>,
    /// Globs (relative to `root`) excluded from loading
    pub exclude_patterns: Vec<String>,
    /// Glob (relative to `root`) restricting which files' classes are migrated
    pub class_files: String,
    /// Glob over class names
    pub class_name_pattern: String,
    /// Module the accessor function is imported from
    pub accessor_module: String,
    /// Accessor function name
    pub accessor_function: String,
    /// Plan and preview without committing
    pub dry_run: bool,
}

impl RunRequest {
    /// Create a request for `root` with default patterns and accessor
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_patterns: vec![DEFAULT_CLASS_FILES_PATTERN.to_string()],
            exclude_patterns: Vec::new(),
            class_files: DEFAULT_CLASS_FILES_PATTERN.to_string(),
            class_name_pattern: DEFAULT_CLASS_NAME_PATTERN.to_string(),
            accessor_module: DEFAULT_ACCESSOR_MODULE.to_string(),
            accessor_function: DEFAULT_ACCESSOR_FUNCTION.to_string(),
            dry_run: false,
        }
    }

    /// Replace the file patterns
    pub fn with_file_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the exclude patterns
    pub fn with_exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the class name glob
    pub fn with_class_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.class_name_pattern = pattern.into();
        self
    }

    /// Set the glob restricting which files' classes are migrated
    pub fn with_class_files(mut self, pattern: impl Into<String>) -> Self {
        self.class_files = pattern.into();
        self
    }

    /// Set the accessor module and function
    pub fn with_accessor(mut self, module: impl Into<String>, function: impl Into<String>) -> Self {
        self.accessor_module = module.into();
        self.accessor_function = function.into();
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Category of a per-class failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A parameter had no usable injection token
    MalformedParameter,
    /// The constructor had overloads or a parameter with no field form
    UnsupportedConstructor,
    /// The file had no amendable import from the injection module
    MissingImportSurface,
}

/// A class that was left unmodified because of a recoverable error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFailure {
    /// File declaring the class
    pub file: PathBuf,
    /// Class name
    pub class_name: String,
    /// Failure category
    pub kind: FailureKind,
    /// Human-readable reason
    pub reason: String,
}

impl ClassFailure {
    /// Build a failure record from a recoverable error; `None` for fatal errors
    pub fn from_error(
        file: impl Into<PathBuf>,
        class_name: impl Into<String>,
        error: &Error,
    ) -> Option<Self> {
        let kind = match error {
            Error::MalformedParameter { .. } => FailureKind::MalformedParameter,
            Error::UnsupportedConstructor { .. } => FailureKind::UnsupportedConstructor,
            Error::MissingImportSurface { .. } => FailureKind::MissingImportSurface,
            _ => return None,
        };
        Some(Self {
            file: file.into(),
            class_name: class_name.into(),
            kind,
            reason: error.to_string(),
        })
    }
}

/// Summary of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Classes whose parameters were promoted to fields
    pub modified: usize,
    /// Classes without constructor parameters
    pub skipped: usize,
    /// Classes left unmodified because of a recoverable error
    pub failures: Vec<ClassFailure>,
    /// Number of edits in the committed (or previewed) log
    pub planned_edits: usize,
    /// Files rewritten on disk; empty for dry runs
    pub files_written: Vec<PathBuf>,
    /// Nothing was committed because the run was a dry run
    pub dry_run: bool,
    /// No class failed
    pub success: bool,
}

/// A run result together with the plan that produced it
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Summary counters
    pub result: RunResult,
    /// Every planned edit
    pub edits: EditLog,
    /// Per-file before/after text; filled for dry runs
    pub previews: Vec<FilePreview>,
}
