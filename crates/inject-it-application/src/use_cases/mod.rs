//! Use cases

pub mod migration;
