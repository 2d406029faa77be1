//! Run reports
//!
//! Human-readable summary with unified diffs for dry runs, or a JSON
//! document for tooling.

use std::io::{self, Write};
use std::path::Path;

use inject_it_domain::{ClassFailure, FilePreview, RunOutcome, RunRequest, RunResult};
use serde::Serialize;
use similar::TextDiff;

/// Banner printed before a human-readable run
pub fn write_banner(out: &mut dyn Write, request: &RunRequest) -> io::Result<()> {
    writeln!(
        out,
        "inject-it {}: `{}` from '{}' into classes matching '{}' under {}{}",
        env!("CARGO_PKG_VERSION"),
        request.accessor_function,
        request.accessor_module,
        request.class_name_pattern,
        request.root.display(),
        if request.dry_run { " (dry run)" } else { "" }
    )
}

/// Summary, failures and, for dry runs, a diff of every planned change
pub fn write_human(
    out: &mut dyn Write,
    request: &RunRequest,
    outcome: &RunOutcome,
) -> io::Result<()> {
    let result = &outcome.result;
    writeln!(out)?;
    writeln!(out, "Migrated: {}", result.modified)?;
    writeln!(out, "Skipped:  {}", result.skipped)?;
    writeln!(out, "Failed:   {}", result.failures.len())?;
    for failure in &result.failures {
        writeln!(out, "  - {}", failure_line(&request.root, failure))?;
    }

    if result.dry_run {
        writeln!(
            out,
            "Dry run, nothing written ({} edit(s) planned)",
            result.planned_edits
        )?;
        for preview in &outcome.previews {
            writeln!(out)?;
            write!(out, "{}", preview_diff(&request.root, preview))?;
        }
    } else {
        writeln!(out, "Files written: {}", result.files_written.len())?;
        for file in &result.files_written {
            writeln!(out, "  {}", display_path(&request.root, file))?;
        }
    }
    Ok(())
}

/// Machine-readable report
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a RunResult,
    edits: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diffs: Vec<JsonDiff>,
}

#[derive(Debug, Serialize)]
struct JsonDiff {
    path: String,
    diff: String,
}

/// Write the run result as pretty-printed JSON
pub fn write_json(
    out: &mut dyn Write,
    request: &RunRequest,
    outcome: &RunOutcome,
) -> io::Result<()> {
    let report = JsonReport {
        result: &outcome.result,
        edits: outcome.edits.descriptions(),
        diffs: outcome
            .previews
            .iter()
            .map(|preview| JsonDiff {
                path: display_path(&request.root, &preview.path),
                diff: preview_diff(&request.root, preview),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn failure_line(root: &Path, failure: &ClassFailure) -> String {
    format!(
        "{}#{}: {}",
        display_path(root, &failure.file),
        failure.class_name,
        failure.reason
    )
}

/// Unified diff of one previewed file, labelled relative to `root`
pub fn preview_diff(root: &Path, preview: &FilePreview) -> String {
    let path = display_path(root, &preview.path);
    TextDiff::from_lines(&preview.before, &preview.after)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}

/// `path` relative to `root` when it lies under it
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
