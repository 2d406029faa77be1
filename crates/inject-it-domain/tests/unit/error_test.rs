//! Tests for the error taxonomy

use inject_it_domain::{ClassFailure, Error, FailureKind};

#[test]
fn test_per_class_errors_are_recoverable() {
    assert!(!Error::malformed_parameter("AComponent", "foo").is_fatal());
    assert!(!Error::unsupported_constructor("AComponent", "rest parameter").is_fatal());
    assert!(!Error::missing_import("a.ts", "@angular/core", "no import statement").is_fatal());
}

#[test]
fn test_tree_and_commit_errors_are_fatal() {
    assert!(Error::tree("root does not exist").is_fatal());
    assert!(Error::commit("disk full", vec!["a.ts: import `inject`".to_string()]).is_fatal());
    assert!(Error::config("bad level").is_fatal());
}

#[test]
fn test_commit_error_reports_unpersisted_count() {
    let error = Error::commit("disk full", vec!["one".to_string(), "two".to_string()]);
    assert_eq!(
        error.to_string(),
        "Commit failed, 2 edit(s) not persisted: disk full"
    );
}

#[test]
fn test_class_failure_from_error() {
    let error = Error::malformed_parameter("AComponent", "foo");
    let failure = ClassFailure::from_error("a.ts", "AComponent", &error).unwrap();

    assert_eq!(failure.kind, FailureKind::MalformedParameter);
    assert!(failure.reason.contains("`foo`"));
    assert!(ClassFailure::from_error("a.ts", "AComponent", &Error::tree("x")).is_none());
}

#[test]
fn test_class_failure_serializes_kind_in_snake_case() {
    let error = Error::missing_import("a.ts", "@angular/core", "type-only import");
    let failure = ClassFailure::from_error("a.ts", "AComponent", &error).unwrap();
    let json = serde_json::to_value(&failure).unwrap();

    assert_eq!(json["kind"], "missing_import_surface");
}

#[test]
fn test_unsupported_constructor_failure_kind() {
    let error = Error::unsupported_constructor("AComponent", "rest parameter `...items`");
    let failure = ClassFailure::from_error("a.ts", "AComponent", &error).unwrap();

    assert_eq!(failure.kind, FailureKind::UnsupportedConstructor);
    assert_eq!(
        serde_json::to_value(&failure).unwrap()["kind"],
        "unsupported_constructor"
    );
}
