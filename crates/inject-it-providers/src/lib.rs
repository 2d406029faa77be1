//! Provider implementations for inject-it
//!
//! - [`language`] - TypeScript parsing with tree-sitter into the domain snapshot
//! - [`project`] - file discovery and the filesystem-backed [`ProjectProvider`]
//!
//! [`ProjectProvider`]: inject_it_domain::ProjectProvider

pub mod constants;
pub mod language;
pub mod project;

pub use language::TypeScriptParser;
pub use project::{DiscoveredFile, FileDiscovery, FileSystemProjectProvider};
