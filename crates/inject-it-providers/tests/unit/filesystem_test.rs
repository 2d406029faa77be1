//! Tests for loading and committing projects on disk

use std::fs;
use std::path::{Path, PathBuf};

use inject_it_domain::{EditKind, EditLog, Error, ProjectProvider, RunRequest, TextEdit};
use inject_it_providers::FileSystemProjectProvider;
use tempfile::TempDir;

use crate::test_utils::{end_of, write_file};

const SOURCE: &str = "import { Component } from '@angular/core';\n\nexport class AppComponent {}\n";

fn add_import(log: &mut EditLog, file: &Path, at: usize) {
    log.push(
        file,
        EditKind::AddNamedImport {
            module: "@angular/core".to_string(),
            name: "inject".to_string(),
        },
        TextEdit::insert(at, ", inject"),
    );
}

#[test]
fn test_load_parses_selected_files() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/app.component.ts", SOURCE);
    write_file(dir.path(), "src/app.component.spec.js", "");
    write_file(dir.path(), "node_modules/x/index.ts", "export class Lib {}");

    let provider = FileSystemProjectProvider::new().unwrap();
    let request = RunRequest::new(dir.path()).with_exclude_patterns(["**/node_modules/**"]);
    let project = provider.load(&request).unwrap();

    assert_eq!(project.units.len(), 1);
    let unit = &project.units[0];
    assert_eq!(unit.relative_path, PathBuf::from("src/app.component.ts"));
    assert_eq!(unit.text, SOURCE);
    assert_eq!(unit.classes[0].name, "AppComponent");
}

#[test]
fn test_load_rejects_missing_root() {
    let dir = TempDir::new().unwrap();
    let provider = FileSystemProjectProvider::new().unwrap();
    let err = provider
        .load(&RunRequest::new(dir.path().join("missing")))
        .unwrap_err();
    assert!(matches!(err, Error::TreeConstruction { .. }));
}

#[test]
fn test_commit_writes_every_touched_file() {
    let dir = TempDir::new().unwrap();
    let a = write_file(dir.path(), "a.component.ts", SOURCE);
    let b = write_file(dir.path(), "b.component.ts", SOURCE);
    let untouched = write_file(dir.path(), "c.component.ts", SOURCE);

    let provider = FileSystemProjectProvider::new().unwrap();
    let project = provider.load(&RunRequest::new(dir.path())).unwrap();

    let at = end_of(SOURCE, "{ Component");
    let mut log = EditLog::new();
    add_import(&mut log, &a, at);
    add_import(&mut log, &b, at);

    let written = provider.commit(&project, &log).unwrap();
    assert_eq!(written, vec![a.clone(), b.clone()]);

    let expected = SOURCE.replace("{ Component }", "{ Component, inject }");
    assert_eq!(fs::read_to_string(&a).unwrap(), expected);
    assert_eq!(fs::read_to_string(&b).unwrap(), expected);
    assert_eq!(fs::read_to_string(&untouched).unwrap(), SOURCE);
}

#[test]
fn test_empty_log_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.component.ts", SOURCE);

    let provider = FileSystemProjectProvider::new().unwrap();
    let project = provider.load(&RunRequest::new(dir.path())).unwrap();

    assert!(provider.commit(&project, &EditLog::new()).unwrap().is_empty());
}

#[test]
fn test_conflicting_edits_leave_storage_unchanged() {
    let dir = TempDir::new().unwrap();
    let a = write_file(dir.path(), "a.component.ts", SOURCE);
    let b = write_file(dir.path(), "b.component.ts", SOURCE);

    let provider = FileSystemProjectProvider::new().unwrap();
    let project = provider.load(&RunRequest::new(dir.path())).unwrap();

    let mut log = EditLog::new();
    add_import(&mut log, &a, end_of(SOURCE, "{ Component"));
    add_import(&mut log, &b, 0);
    log.push(
        &b,
        EditKind::RemoveParameter {
            class: "AppComponent".to_string(),
            parameter: "x".to_string(),
        },
        TextEdit::insert(SOURCE.len() + 10, "out of range"),
    );

    let err = provider.commit(&project, &log).unwrap_err();
    match err {
        Error::Commit { unpersisted, .. } => assert_eq!(unpersisted.len(), 3),
        other => panic!("expected commit error, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&a).unwrap(), SOURCE);
    assert_eq!(fs::read_to_string(&b).unwrap(), SOURCE);
}

#[test]
fn test_commit_refuses_files_changed_since_load() {
    let dir = TempDir::new().unwrap();
    let a = write_file(dir.path(), "a.component.ts", SOURCE);

    let provider = FileSystemProjectProvider::new().unwrap();
    let project = provider.load(&RunRequest::new(dir.path())).unwrap();
    fs::write(&a, "// edited elsewhere\n").unwrap();

    let mut log = EditLog::new();
    add_import(&mut log, &a, end_of(SOURCE, "{ Component"));

    let err = provider.commit(&project, &log).unwrap_err();
    assert!(matches!(err, Error::Commit { .. }));
    assert_eq!(fs::read_to_string(&a).unwrap(), "// edited elsewhere\n");
}

#[test]
fn test_preview_does_not_write() {
    let dir = TempDir::new().unwrap();
    let a = write_file(dir.path(), "a.component.ts", SOURCE);

    let provider = FileSystemProjectProvider::new().unwrap();
    let project = provider.load(&RunRequest::new(dir.path())).unwrap();

    let mut log = EditLog::new();
    add_import(&mut log, &a, end_of(SOURCE, "{ Component"));

    let previews = provider.preview(&project, &log).unwrap();
    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].before, SOURCE);
    assert!(previews[0].after.contains("{ Component, inject }"));
    assert_eq!(fs::read_to_string(&a).unwrap(), SOURCE);
}
