//! Migration orchestrator
//!
//! `Init → Selecting → (Reconciling → Rewriting)* → Committing → Done`, with
//! `Failed` reachable on a fatal error. Planning is pure: every class is
//! planned into one [`EditLog`], and the log is committed once at the end.
//! A class that fails is rolled back out of the log and reported; only tree
//! construction and commit failures abort the run.

use crate::domain_services::accessor::AccessorExpressionBuilder;
use crate::domain_services::imports::ImportReconciler;
use crate::domain_services::rewriter::MemberRewriter;
use crate::domain_services::selector::ClassSelector;
use inject_it_domain::{
    ClassFailure, EditLog, ProgressSink, Project, ProjectProvider, Result, RunOutcome, RunRequest,
    RunResult,
};
use std::fmt;
use tracing::{debug, info, warn};

/// Phase of a migration run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationState {
    /// Nothing loaded yet
    Init,
    /// Choosing eligible classes
    Selecting,
    /// Ensuring the accessor import of a class's file
    Reconciling,
    /// Planning a class's member edits
    Rewriting,
    /// Persisting the edit log
    Committing,
    /// Finished
    Done,
    /// Aborted on a fatal error
    Failed,
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Selecting => "selecting",
            Self::Reconciling => "reconciling",
            Self::Rewriting => "rewriting",
            Self::Committing => "committing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Edits and counters produced by planning a project
#[derive(Debug, Clone, Default)]
pub struct MigrationPlan {
    /// Every edit to commit
    pub edits: EditLog,
    /// Classes whose parameters were promoted
    pub modified: usize,
    /// Classes without constructor parameters
    pub skipped: usize,
    /// Classes left unmodified because of a recoverable error
    pub failures: Vec<ClassFailure>,
}

/// Plan the migration of every eligible class in `project`
///
/// Fails only on fatal errors (an invalid class glob); per-class errors are
/// collected into [`MigrationPlan::failures`].
pub fn plan(
    project: &Project,
    request: &RunRequest,
    progress: &dyn ProgressSink,
) -> Result<MigrationPlan> {
    debug!(state = %MigrationState::Selecting);
    let selector = ClassSelector::from_request(request)?;
    let reconciler = ImportReconciler::new(&request.accessor_module, &request.accessor_function);
    let rewriter = MemberRewriter::new(AccessorExpressionBuilder::new(&request.accessor_function));

    let classes = selector.select(project);
    info!(classes = classes.len(), "Selected classes");

    let mut plan = MigrationPlan::default();
    for (unit, class) in classes {
        if class.constructor_parameters().is_empty() {
            debug!(class = %class.qualified_name(), "No constructor parameters, skipping");
            plan.skipped += 1;
            continue;
        }

        let checkpoint = plan.edits.checkpoint();
        debug!(state = %MigrationState::Reconciling, class = %class.qualified_name());
        let outcome = reconciler.reconcile(unit, &mut plan.edits).and_then(|_| {
            debug!(state = %MigrationState::Rewriting, class = %class.qualified_name());
            rewriter.rewrite(class, &mut plan.edits)
        });

        match outcome {
            Ok(_) => plan.modified += 1,
            Err(error) => {
                plan.edits.rollback(checkpoint);
                let Some(failure) = ClassFailure::from_error(&class.file, &class.name, &error)
                else {
                    return Err(error);
                };
                warn!(
                    class = %class.qualified_name(),
                    reason = %failure.reason,
                    "Class left unmodified"
                );
                progress.class_failed(&failure);
                plan.failures.push(failure);
            }
        }
    }

    Ok(plan)
}

/// Load, plan and commit a migration
///
/// Dry runs stop after planning and return previews instead of committing.
pub fn run(
    provider: &dyn ProjectProvider,
    request: &RunRequest,
    progress: &dyn ProgressSink,
) -> Result<RunOutcome> {
    debug!(state = %MigrationState::Init, root = %request.root.display());
    progress.started("Migrating to call-based injection");

    let outcome = execute(provider, request, progress);
    match &outcome {
        Ok(outcome) => {
            debug!(state = %MigrationState::Done);
            progress.succeeded(&summary(&outcome.result));
        }
        Err(error) => {
            debug!(state = %MigrationState::Failed);
            progress.failed(&error.to_string());
        }
    }
    outcome
}

fn execute(
    provider: &dyn ProjectProvider,
    request: &RunRequest,
    progress: &dyn ProgressSink,
) -> Result<RunOutcome> {
    let project = provider.load(request)?;
    info!(files = project.units.len(), "Loaded project");

    let plan = plan(&project, request, progress)?;

    let mut result = RunResult {
        modified: plan.modified,
        skipped: plan.skipped,
        success: plan.failures.is_empty(),
        failures: plan.failures,
        planned_edits: plan.edits.len(),
        files_written: Vec::new(),
        dry_run: request.dry_run,
    };

    let previews = if request.dry_run {
        provider.preview(&project, &plan.edits)?
    } else {
        debug!(state = %MigrationState::Committing, edits = plan.edits.len());
        result.files_written = provider.commit(&project, &plan.edits)?;
        info!(files = result.files_written.len(), "Committed edits");
        Vec::new()
    };

    Ok(RunOutcome {
        result,
        edits: plan.edits,
        previews,
    })
}

fn summary(result: &RunResult) -> String {
    format!(
        "{} class(es) migrated, {} skipped, {} failed",
        result.modified,
        result.skipped,
        result.failures.len()
    )
}
