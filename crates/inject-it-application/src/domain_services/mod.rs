//! Domain services of the migration engine, leaf-first

pub mod accessor;
pub mod annotations;
pub mod imports;
pub mod options;
pub mod rewriter;
pub mod selector;
