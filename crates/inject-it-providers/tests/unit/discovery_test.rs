//! Tests for file discovery

use std::path::{Path, PathBuf};

use inject_it_providers::FileDiscovery;
use tempfile::TempDir;

use crate::test_utils::write_file;

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| (*p).to_string()).collect()
}

#[test]
fn test_discovers_typescript_files_in_path_order() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/b.component.ts", "");
    write_file(dir.path(), "src/a.component.ts", "");
    write_file(dir.path(), "src/view.tsx", "");
    write_file(dir.path(), "src/main.js", "");
    write_file(dir.path(), "README.md", "");

    let discovery = FileDiscovery::new(&patterns(&["**/*"]), &[]).unwrap();
    let files = discovery.discover(dir.path()).unwrap();
    let relative: Vec<PathBuf> = files.into_iter().map(|f| f.relative_path).collect();

    assert_eq!(
        relative,
        vec![
            PathBuf::from("src/a.component.ts"),
            PathBuf::from("src/b.component.ts"),
            PathBuf::from("src/view.tsx"),
        ]
    );
}

#[test]
fn test_exclude_patterns_win_over_includes() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/app.component.ts", "");
    write_file(dir.path(), "node_modules/lib/index.ts", "");
    write_file(dir.path(), "src/types.d.ts", "");

    let discovery = FileDiscovery::new(
        &patterns(&["**/*.ts"]),
        &patterns(&["**/node_modules/**", "**/*.d.ts"]),
    )
    .unwrap();
    let files = discovery.discover(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path, Path::new("src/app.component.ts"));
    assert_eq!(files[0].path, dir.path().join("src/app.component.ts"));
}

#[test]
fn test_star_does_not_cross_directories() {
    let discovery = FileDiscovery::new(&patterns(&["src/*.ts"]), &[]).unwrap();

    assert!(discovery.is_selected(Path::new("src/app.ts")));
    assert!(!discovery.is_selected(Path::new("src/nested/app.ts")));
}

#[test]
fn test_missing_root_is_a_tree_error() {
    let dir = TempDir::new().unwrap();
    let discovery = FileDiscovery::new(&patterns(&["**/*.ts"]), &[]).unwrap();

    let err = discovery.discover(&dir.path().join("absent")).unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let result = FileDiscovery::new(&patterns(&["src/[.ts"]), &[]);
    assert!(result.is_err());
}
