//! Filesystem project provider
//!
//! Loads a project from disk and commits edit logs back to it. A commit is
//! all or nothing: every touched file is rendered and staged next to its
//! target first, then the staged files are renamed over their targets. If
//! a rename fails, files already replaced are restored from the snapshot.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use inject_it_domain::{
    EditLog, Error, Project, ProjectProvider, Result, RunRequest, SourceUnit, apply_edits,
};
use tempfile::NamedTempFile;
use tracing::{debug, error, info};

use crate::language::TypeScriptParser;
use crate::project::discovery::FileDiscovery;

/// [`ProjectProvider`] reading and writing TypeScript sources on disk
pub struct FileSystemProjectProvider {
    parser: TypeScriptParser,
}

impl FileSystemProjectProvider {
    /// Create a provider with freshly compiled grammars
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: TypeScriptParser::new()?,
        })
    }

    fn read_unit(&self, path: &Path, relative_path: &Path) -> Result<SourceUnit> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::tree_with_source(format!("Failed to read {}", path.display()), e))?;
        self.parser.parse(path, relative_path, text)
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn load(&self, request: &RunRequest) -> Result<Project> {
        let discovery = FileDiscovery::new(&request.file_patterns, &request.exclude_patterns)?;
        let units = discovery
            .discover(&request.root)?
            .iter()
            .map(|file| self.read_unit(&file.path, &file.relative_path))
            .collect::<Result<Vec<_>>>()?;

        let classes: usize = units.iter().map(|unit| unit.classes.len()).sum();
        info!(root = %request.root.display(), files = units.len(), classes, "Project loaded");
        Ok(Project::new(&request.root, units))
    }

    fn commit(&self, project: &Project, edits: &EditLog) -> Result<Vec<PathBuf>> {
        if edits.is_empty() {
            return Ok(Vec::new());
        }
        let pending = edits.descriptions();

        let mut rendered = Vec::new();
        for file in edits.files() {
            let unit = project.unit(file).ok_or_else(|| {
                Error::commit(
                    format!("{} is not part of the project", file.display()),
                    pending.clone(),
                )
            })?;
            let on_disk = fs::read_to_string(&unit.path).map_err(|e| {
                Error::commit_with_source(
                    format!("Failed to read {}", file.display()),
                    pending.clone(),
                    e,
                )
            })?;
            if on_disk != unit.text {
                return Err(Error::commit(
                    format!("{} changed on disk since it was loaded", file.display()),
                    pending,
                ));
            }
            let after = apply_edits(&unit.text, edits.for_file(file).map(|planned| &planned.edit))
                .map_err(|conflict| {
                    Error::commit_with_source(
                        format!("Conflicting edits in {}", file.display()),
                        pending.clone(),
                        conflict,
                    )
                })?;
            rendered.push((unit, after));
        }

        let mut staged = Vec::with_capacity(rendered.len());
        for (unit, after) in &rendered {
            let temp = stage(&unit.path, after).map_err(|e| {
                Error::commit_with_source(
                    format!("Failed to stage {}", unit.path.display()),
                    pending.clone(),
                    e,
                )
            })?;
            staged.push((*unit, temp));
        }

        let mut written: Vec<&SourceUnit> = Vec::with_capacity(staged.len());
        for (unit, temp) in staged {
            if let Err(e) = temp.persist(&unit.path) {
                restore(&written);
                return Err(Error::commit_with_source(
                    format!("Failed to replace {}", unit.path.display()),
                    pending,
                    e.error,
                ));
            }
            debug!(file = %unit.path.display(), "Replaced");
            written.push(unit);
        }

        Ok(written.into_iter().map(|unit| unit.path.clone()).collect())
    }
}

/// Write `contents` to a temporary file in the target's directory
fn stage(target: &Path, contents: &str) -> std::io::Result<NamedTempFile> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    let permissions = fs::metadata(target)?.permissions();
    temp.as_file().set_permissions(permissions)?;
    Ok(temp)
}

/// Put back the loaded text of files already replaced
fn restore(written: &[&SourceUnit]) {
    for unit in written {
        if let Err(e) = fs::write(&unit.path, &unit.text) {
            error!(file = %unit.path.display(), error = %e, "Failed to restore file");
        }
    }
}
