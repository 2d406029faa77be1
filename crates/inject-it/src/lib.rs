//! # inject-it
//!
//! Migrates TypeScript classes from constructor-parameter dependency
//! injection to field initializers calling an accessor function:
//!
//! ```text
//! constructor(private readonly foo: FooService) {}
//! ```
//!
//! becomes
//!
//! ```text
//! private readonly foo: FooService = inject(FooService);
//!
//! constructor() {}
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use inject_it::application::run;
//! use inject_it::domain::{NullProgress, RunRequest};
//! use inject_it::providers::FileSystemProjectProvider;
//!
//! # fn main() -> inject_it::domain::Result<()> {
//! let provider = FileSystemProjectProvider::new()?;
//! let outcome = run(&provider, &RunRequest::new("./src"), &NullProgress)?;
//! println!("{} classes migrated", outcome.result.modified);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, ports and errors
//! - `application` - the planning engine and orchestrator
//! - `providers` - tree-sitter TypeScript parsing and filesystem persistence
//! - `infrastructure` - configuration, logging and progress reporting
//! - [`cli`] and [`report`] - the `inject-it` command line

pub mod cli;
pub mod report;

/// Domain layer - value objects, ports and errors
pub mod domain {
    pub use inject_it_domain::*;
}

/// Application layer - migration engine
pub mod application {
    pub use inject_it_application::*;
}

/// Infrastructure layer - configuration, logging, progress
pub mod infrastructure {
    pub use inject_it_infrastructure::*;
}

/// Providers - TypeScript project loading and persistence
pub mod providers {
    pub use inject_it_providers::*;
}

pub use cli::{Cli, RunStatus};
pub use domain::{Error, Result, RunOutcome, RunRequest, RunResult};
