//! Project provider port

use crate::error::{Error, Result};
use crate::value_objects::{EditLog, FilePreview, Project, RunRequest, apply_edits};
use std::path::PathBuf;

/// Builds the project snapshot and persists edit logs against it
///
/// # Example
///
/// ```ignore
/// use inject_it_domain::ports::ProjectProvider;
///
/// let project = provider.load(&request)?;
/// // ... plan edits against `project` ...
/// let written = provider.commit(&project, &edits)?;
/// ```
pub trait ProjectProvider {
    /// Load and parse every file selected by the request's patterns
    ///
    /// Fails with [`Error::TreeConstruction`] when the root is invalid or a
    /// selected file cannot be read.
    fn load(&self, request: &RunRequest) -> Result<Project>;

    /// Persist every edit in `edits`, all or nothing
    ///
    /// Returns the files written. Fails with [`Error::Commit`] listing the
    /// edits that were not persisted; storage is left as it was.
    fn commit(&self, project: &Project, edits: &EditLog) -> Result<Vec<PathBuf>>;

    /// Before/after text of every file touched by `edits`, without writing
    fn preview(&self, project: &Project, edits: &EditLog) -> Result<Vec<FilePreview>> {
        edits
            .files()
            .into_iter()
            .map(|file| -> Result<FilePreview> {
                let unit = project.unit(file).ok_or_else(|| {
                    Error::commit(
                        format!("{} is not part of the project", file.display()),
                        edits.for_file(file).map(ToString::to_string).collect(),
                    )
                })?;
                let planned = edits.for_file(file).map(|planned| &planned.edit);
                let after = apply_edits(&unit.text, planned).map_err(|conflict| {
                    Error::commit_with_source(
                        format!("conflicting edits in {}", file.display()),
                        edits.for_file(file).map(ToString::to_string).collect(),
                        conflict,
                    )
                })?;
                Ok(FilePreview {
                    path: file.to_path_buf(),
                    before: unit.text.clone(),
                    after,
                })
            })
            .collect()
    }
}
