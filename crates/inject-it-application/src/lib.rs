//! Application layer for inject-it
//!
//! The migration engine. Domain services turn one constructor parameter into
//! one field declaration and keep the accessor import in place; the
//! [`use_cases::migration`] orchestrator drives them over every selected class
//! and hands the resulting edit log to the project provider.
//!
//! ```ignore
//! use inject_it_application::use_cases::migration::run;
//! use inject_it_domain::{NullProgress, RunRequest};
//!
//! let outcome = run(&provider, &RunRequest::new("."), &NullProgress)?;
//! println!("{} classes migrated", outcome.result.modified);
//! ```

pub mod domain_services;
pub mod use_cases;

pub use domain_services::accessor::AccessorExpressionBuilder;
pub use domain_services::annotations::map_annotations;
pub use domain_services::imports::{ImportOutcome, ImportReconciler};
pub use domain_services::options::{render_object_literal, serialize_options};
pub use domain_services::rewriter::{MemberRewriter, RewriteOutcome};
pub use domain_services::selector::ClassSelector;
pub use use_cases::migration::{MigrationPlan, MigrationState, plan, run};
