//! File discovery
//!
//! Walks the project root in file-name order and keeps TypeScript files whose
//! root-relative path matches an include glob and no exclude glob.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use inject_it_domain::{Error, Result};
use walkdir::WalkDir;

use crate::language::TypeScriptParser;

/// A file selected for loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path on disk
    pub path: PathBuf,
    /// Path relative to the project root
    pub relative_path: PathBuf,
}

/// Include/exclude filter over a project tree
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    include: GlobSet,
    exclude: GlobSet,
}

impl FileDiscovery {
    /// Build a filter from include and exclude globs
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_set(include)?,
            exclude: build_set(exclude)?,
        })
    }

    /// Whether a root-relative path is selected
    pub fn is_selected(&self, relative_path: &Path) -> bool {
        TypeScriptParser::supports(relative_path)
            && self.include.is_match(relative_path)
            && !self.exclude.is_match(relative_path)
    }

    /// Selected files under `root`, sorted by path
    pub fn discover(&self, root: &Path) -> Result<Vec<DiscoveredFile>> {
        if !root.is_dir() {
            return Err(Error::tree(format!(
                "Project root {} is not a directory",
                root.display()
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                Error::tree_with_source(format!("Failed to walk {}", root.display()), e)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative_path) = entry.path().strip_prefix(root) else {
                continue;
            };
            if self.is_selected(relative_path) {
                files.push(DiscoveredFile {
                    relative_path: relative_path.to_path_buf(),
                    path: entry.path().to_path_buf(),
                });
            }
        }

        tracing::debug!(root = %root.display(), files = files.len(), "Discovered files");
        Ok(files)
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| Error::tree_with_source(format!("Invalid file pattern '{pattern}'"), e))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::tree_with_source("Failed to build file pattern set", e))
}
