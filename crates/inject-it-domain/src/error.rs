//! Error handling types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for inject-it
///
/// Per-class errors ([`Error::MalformedParameter`],
/// [`Error::UnsupportedConstructor`], [`Error::MissingImportSurface`]) are
/// recoverable: the orchestrator records them and moves on. Everything else
/// aborts the run before anything is written.
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor parameter has neither an `@Inject` token nor a declared type
    #[error(
        "Malformed parameter `{parameter}` in class `{class}`: \
         no injection token and no declared type"
    )]
    MalformedParameter {
        /// Name of the class owning the constructor
        class: String,
        /// Name of the offending parameter
        parameter: String,
    },

    /// The constructor uses a form that has no field equivalent
    #[error("Unsupported constructor in class `{class}`: {reason}")]
    UnsupportedConstructor {
        /// Name of the class owning the constructor
        class: String,
        /// What could not be promoted
        reason: String,
    },

    /// The file has no import from the injection module able to carry the accessor
    #[error("No usable import from `{module}` in {}: {reason}", .file.display())]
    MissingImportSurface {
        /// File that needed the accessor import
        file: PathBuf,
        /// Module the accessor is imported from
        module: String,
        /// Why no import statement could be amended
        reason: String,
    },

    /// The project tree could not be built
    #[error("Failed to build source tree: {message}")]
    TreeConstruction {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Persisting the accumulated edits failed; nothing was written
    #[error("Commit failed, {} edit(s) not persisted: {message}", .unpersisted.len())]
    Commit {
        /// Description of the failure
        message: String,
        /// Description of every edit that was not persisted
        unpersisted: Vec<String>,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a malformed parameter error
    pub fn malformed_parameter<C: Into<String>, P: Into<String>>(class: C, parameter: P) -> Self {
        Self::MalformedParameter {
            class: class.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an unsupported constructor error
    pub fn unsupported_constructor<C: Into<String>, R: Into<String>>(class: C, reason: R) -> Self {
        Self::UnsupportedConstructor {
            class: class.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing import surface error
    pub fn missing_import<F, M, R>(file: F, module: M, reason: R) -> Self
    where
        F: Into<PathBuf>,
        M: Into<String>,
        R: Into<String>,
    {
        Self::MissingImportSurface {
            file: file.into(),
            module: module.into(),
            reason: reason.into(),
        }
    }

    /// Create a tree construction error
    pub fn tree<S: Into<String>>(message: S) -> Self {
        Self::TreeConstruction {
            message: message.into(),
            source: None,
        }
    }

    /// Create a tree construction error with source
    pub fn tree_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::TreeConstruction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a commit error listing the edits that were not persisted
    pub fn commit<S: Into<String>>(message: S, unpersisted: Vec<String>) -> Self {
        Self::Commit {
            message: message.into(),
            unpersisted,
            source: None,
        }
    }

    /// Create a commit error with source
    pub fn commit_with_source<S, E>(message: S, unpersisted: Vec<String>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Commit {
            message: message.into(),
            unpersisted,
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error aborts the whole run
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::MalformedParameter { .. }
                | Self::UnsupportedConstructor { .. }
                | Self::MissingImportSurface { .. }
        )
    }
}
