//! Shared fixtures: parsed snippets, an in-memory provider and a recording sink

use std::cell::RefCell;
use std::path::PathBuf;

use inject_it_domain::{
    ClassFailure, EditLog, Error, Project, ProgressSink, ProjectProvider, Result, RunRequest,
    SourceUnit, apply_edits,
};
use inject_it_providers::TypeScriptParser;

/// Parse `source` as the file `name` under the fake root `/project`
pub fn parse(name: &str, source: &str) -> SourceUnit {
    TypeScriptParser::new()
        .unwrap()
        .parse(PathBuf::from("/project").join(name), name, source.to_string())
        .unwrap()
}

/// Project made of parsed snippets
pub fn project(files: &[(&str, &str)]) -> Project {
    Project::new(
        "/project",
        files.iter().map(|(name, source)| parse(name, source)).collect(),
    )
}

/// Apply every edit planned for `unit`
pub fn render(unit: &SourceUnit, log: &EditLog) -> String {
    apply_edits(&unit.text, log.for_file(&unit.path).map(|planned| &planned.edit)).unwrap()
}

/// Provider serving a fixed project and keeping committed logs in memory
pub struct InMemoryProvider {
    pub project: Project,
    pub fail_commit: bool,
    pub committed: RefCell<Vec<EditLog>>,
}

impl InMemoryProvider {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            fail_commit: false,
            committed: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(project: Project) -> Self {
        Self {
            fail_commit: true,
            ..Self::new(project)
        }
    }
}

impl ProjectProvider for InMemoryProvider {
    fn load(&self, _request: &RunRequest) -> Result<Project> {
        Ok(self.project.clone())
    }

    fn commit(&self, _project: &Project, edits: &EditLog) -> Result<Vec<PathBuf>> {
        if self.fail_commit {
            return Err(Error::commit("disk full", edits.descriptions()));
        }
        self.committed.borrow_mut().push(edits.clone());
        Ok(edits.files().into_iter().map(PathBuf::from).collect())
    }
}

/// Sink recording every notification as a line of text
#[derive(Default)]
pub struct RecordingProgress {
    pub events: RefCell<Vec<String>>,
}

impl ProgressSink for RecordingProgress {
    fn started(&self, message: &str) {
        self.events.borrow_mut().push(format!("started: {message}"));
    }

    fn class_failed(&self, failure: &ClassFailure) {
        self.events
            .borrow_mut()
            .push(format!("class_failed: {}", failure.class_name));
    }

    fn succeeded(&self, message: &str) {
        self.events.borrow_mut().push(format!("succeeded: {message}"));
    }

    fn failed(&self, message: &str) {
        self.events.borrow_mut().push(format!("failed: {message}"));
    }
}
