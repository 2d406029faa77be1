//! Value Objects
//!
//! Immutable snapshots and records passed between the layers. The project
//! snapshot is produced by a [`ProjectProvider`](crate::ports::ProjectProvider),
//! the engine reads it and records its intent in an [`EditLog`], and the
//! provider applies that log in one batch.

pub mod annotation;
pub mod edit;
pub mod field;
pub mod options;
pub mod run;
pub mod source;

pub use annotation::{AnnotationKind, AnnotationToken};
pub use edit::{EditConflict, EditKind, EditLog, FilePreview, PlannedEdit, TextEdit, apply_edits};
pub use field::FieldSpec;
pub use options::{OptionValue, OptionsRecord, ResolutionOption};
pub use run::{ClassFailure, FailureKind, RunOutcome, RunRequest, RunResult};
pub use source::{
    ClassEntity, ConstructorDecl, ImportDeclaration, ImportInsertion, ParameterBinding,
    ParameterSpec, Project, Scope, SourceUnit, TextRange, TypeOnlySpecifier,
};
