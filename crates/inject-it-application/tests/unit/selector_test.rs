//! Tests for class selection

use inject_it_application::ClassSelector;
use inject_it_domain::RunRequest;

use crate::test_utils::project;

fn fixture() -> inject_it_domain::Project {
    project(&[
        (
            "src/b/b.component.ts",
            "export class BComponent {}\nexport class BService {}\n",
        ),
        (
            "src/a/a.component.ts",
            "export class AComponent {}\nexport class ZComponent {}\n",
        ),
        ("lib/c.component.ts", "export class CComponent {}\n"),
    ])
}

fn names(selector: &ClassSelector, project: &inject_it_domain::Project) -> Vec<String> {
    selector
        .select(project)
        .into_iter()
        .map(|(_, class)| class.name.clone())
        .collect()
}

#[test]
fn test_default_request_selects_components_in_path_order() {
    let project = fixture();
    let selector = ClassSelector::from_request(&RunRequest::new("/project")).unwrap();

    assert_eq!(
        names(&selector, &project),
        ["CComponent", "AComponent", "ZComponent", "BComponent"]
    );
}

#[test]
fn test_file_pattern_restricts_selection() {
    let project = fixture();
    let selector = ClassSelector::new("src/**/*.ts", "*").unwrap();

    assert_eq!(
        names(&selector, &project),
        ["AComponent", "ZComponent", "BComponent", "BService"]
    );
}

#[test]
fn test_selection_is_deterministic() {
    let project = fixture();
    let selector = ClassSelector::new("**/*.ts", "*Component").unwrap();

    assert_eq!(names(&selector, &project), names(&selector, &project));
}

#[test]
fn test_invalid_glob_is_a_configuration_error() {
    let err = ClassSelector::new("**/*.ts", "[Component").unwrap_err();
    assert!(matches!(err, inject_it_domain::Error::Configuration { .. }));
}
