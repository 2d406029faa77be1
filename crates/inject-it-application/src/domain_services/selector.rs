//! Class Selector
//!
//! Picks the classes to migrate: the owning file must match a path glob and
//! the class name must match a name glob (`*Component` by default).

use globset::{GlobBuilder, GlobMatcher};
use inject_it_domain::{ClassEntity, Error, Project, Result, RunRequest, SourceUnit};

/// File and name predicate over the classes of a project
#[derive(Debug, Clone)]
pub struct ClassSelector {
    files: GlobMatcher,
    names: GlobMatcher,
}

impl ClassSelector {
    /// Create a selector from a file glob and a class name glob
    pub fn new(file_pattern: &str, name_pattern: &str) -> Result<Self> {
        Ok(Self {
            files: compile(file_pattern, true)?,
            names: compile(name_pattern, false)?,
        })
    }

    /// Create a selector from a run request
    pub fn from_request(request: &RunRequest) -> Result<Self> {
        Self::new(&request.class_files, &request.class_name_pattern)
    }

    /// Whether `class` declared in `unit` is eligible
    pub fn matches(&self, unit: &SourceUnit, class: &ClassEntity) -> bool {
        self.files.is_match(&unit.relative_path) && self.names.is_match(&class.name)
    }

    /// Eligible classes, units in path order and classes in source order
    ///
    /// The order only depends on the project, so repeated runs over the same
    /// input select the same classes in the same order.
    pub fn select<'p>(&self, project: &'p Project) -> Vec<(&'p SourceUnit, &'p ClassEntity)> {
        project
            .classes()
            .filter(|(unit, class)| self.matches(unit, class))
            .collect()
    }
}

/// `*` stays within one path segment when `literal_separator` is set
fn compile(pattern: &str, literal_separator: bool) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(literal_separator)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| Error::config_with_source(format!("Invalid glob pattern '{pattern}'"), e))
}
