//! Language-specific parsers
//!
//! Converts tree-sitter syntax trees into the domain's source snapshot.

pub mod typescript;

pub use typescript::TypeScriptParser;
