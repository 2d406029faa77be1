//! # inject-it domain
//!
//! Core types for migrating constructor-parameter injection to call-based
//! injection. Nothing in this crate touches the filesystem: the project
//! snapshot, the edit log and the run result are plain values, and the
//! collaborators that load and persist source trees are described as ports.
//!
//! ## Organization
//!
//! - [`value_objects`] - source snapshot, annotations, options, fields, edits
//! - [`ports`] - project provider and progress sink contracts
//! - [`error`] - the error taxonomy shared by every layer
//! - [`constants`] - defaults for the migration request

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{NullProgress, ProgressSink, ProjectProvider};
pub use value_objects::{
    AnnotationKind, AnnotationToken, ClassEntity, ClassFailure, ConstructorDecl, EditConflict,
    EditKind, EditLog, FailureKind, FieldSpec, FilePreview, ImportDeclaration, ImportInsertion,
    OptionValue, OptionsRecord, ParameterBinding, ParameterSpec, PlannedEdit, Project,
    ResolutionOption, RunOutcome, RunRequest, RunResult, Scope, SourceUnit, TextEdit, TextRange,
    TypeOnlySpecifier, apply_edits,
};
