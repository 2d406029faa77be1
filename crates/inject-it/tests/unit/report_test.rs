//! Tests for report rendering

use std::path::{Path, PathBuf};

use inject_it::domain::{
    ClassFailure, EditLog, FailureKind, FilePreview, RunOutcome, RunRequest, RunResult,
};
use inject_it::report::{display_path, preview_diff, write_human, write_json};

fn outcome(result: RunResult, previews: Vec<FilePreview>) -> RunOutcome {
    RunOutcome {
        result,
        edits: EditLog::new(),
        previews,
    }
}

#[test]
fn test_display_path_is_relative_to_root() {
    let root = Path::new("/work/app");
    assert_eq!(display_path(root, Path::new("/work/app/src/a.ts")), "src/a.ts");
    assert_eq!(display_path(root, Path::new("/elsewhere/b.ts")), "/elsewhere/b.ts");
}

#[test]
fn test_preview_diff_is_unified() {
    let preview = FilePreview {
        path: PathBuf::from("/work/app/src/a.ts"),
        before: "class A {\n  constructor(b: B) {}\n}\n".to_string(),
        after: "class A {\n  b: B = inject(B);\n\n  constructor() {}\n}\n".to_string(),
    };

    let diff = preview_diff(Path::new("/work/app"), &preview);

    assert!(diff.starts_with("--- a/src/a.ts\n+++ b/src/a.ts\n"));
    assert!(diff.contains("-  constructor(b: B) {}\n"));
    assert!(diff.contains("+  b: B = inject(B);\n"));
}

#[test]
fn test_human_report_lists_failures() {
    let request = RunRequest::new("/work/app");
    let result = RunResult {
        modified: 2,
        skipped: 1,
        failures: vec![ClassFailure {
            file: PathBuf::from("/work/app/src/bad.component.ts"),
            class_name: "BadComponent".to_string(),
            kind: FailureKind::MalformedParameter,
            reason: "no type".to_string(),
        }],
        planned_edits: 6,
        files_written: vec![PathBuf::from("/work/app/src/good.component.ts")],
        dry_run: false,
        success: false,
    };

    let mut out = Vec::new();
    write_human(&mut out, &request, &outcome(result, Vec::new())).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Migrated: 2"));
    assert!(text.contains("Skipped:  1"));
    assert!(text.contains("Failed:   1"));
    assert!(text.contains("  - src/bad.component.ts#BadComponent: no type"));
    assert!(text.contains("Files written: 1"));
    assert!(text.contains("  src/good.component.ts"));
}

#[test]
fn test_json_report_omits_diffs_when_not_dry_run() {
    let request = RunRequest::new("/work/app");
    let result = RunResult {
        modified: 1,
        success: true,
        ..RunResult::default()
    };

    let mut out = Vec::new();
    write_json(&mut out, &request, &outcome(result, Vec::new())).unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(report["modified"], 1);
    assert_eq!(report["success"], true);
    assert!(report["edits"].as_array().unwrap().is_empty());
    assert!(report.get("diffs").is_none());
}
