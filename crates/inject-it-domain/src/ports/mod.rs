//! Domain Port Interfaces
//!
//! Contracts for the collaborators the engine consumes but does not
//! implement: the project provider (load, preview, commit) and the
//! progress sink. Implementations live in `inject-it-providers` and
//! `inject-it-infrastructure`.

/// Progress notifications
pub mod progress;
/// Project tree loading and persistence
pub mod project;

pub use progress::{NullProgress, ProgressSink};
pub use project::ProjectProvider;
