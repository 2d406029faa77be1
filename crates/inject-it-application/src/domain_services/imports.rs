//! Import Reconciler
//!
//! Makes sure the accessor function is imported from the injection module,
//! exactly once per file.

use inject_it_domain::{EditKind, EditLog, Error, ImportInsertion, Result, SourceUnit, TextEdit};
use tracing::debug;

/// Result of reconciling one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The name is imported already, or an earlier class planned the import
    AlreadyImported,
    /// The first import statement from the module gains the name
    Amended,
}

/// Adds `name` to the first import from `module` when it is missing
#[derive(Debug, Clone)]
pub struct ImportReconciler {
    module: String,
    name: String,
}

impl ImportReconciler {
    /// Create a reconciler importing `name` from `module`
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Plan the import edit for `unit`, if one is needed
    ///
    /// Fails with [`Error::MissingImportSurface`] when the file has no import
    /// from the module, when the first one cannot carry a value import, or
    /// when the name is bound by an `import type` statement. An inline
    /// `type` specifier for the name is upgraded to a value specifier.
    pub fn reconcile(&self, unit: &SourceUnit, log: &mut EditLog) -> Result<ImportOutcome> {
        let Some(first) = unit.imports_from(&self.module).next() else {
            return Err(Error::missing_import(
                &unit.path,
                &self.module,
                "the file has no import statement from this module",
            ));
        };

        if unit
            .imports_from(&self.module)
            .any(|import| import.binds(&self.name))
            || log.has_named_import(&unit.path, &self.module, &self.name)
        {
            return Ok(ImportOutcome::AlreadyImported);
        }

        if let Some(spec) = unit
            .imports_from(&self.module)
            .find_map(|import| import.inline_type_specifier(&self.name))
        {
            self.record(unit, log, TextEdit::delete(spec.modifier));
            return Ok(ImportOutcome::Amended);
        }

        if unit
            .imports_from(&self.module)
            .any(|import| import.binds_type_only(&self.name))
        {
            return Err(Error::missing_import(
                &unit.path,
                &self.module,
                format!("`{}` is imported with `import type`", self.name),
            ));
        }

        if first.type_only {
            return Err(Error::missing_import(
                &unit.path,
                &self.module,
                format!("the first import is type-only and cannot carry `{}`", self.name),
            ));
        }

        let edit = match &first.insertion {
            ImportInsertion::AfterLastSpecifier { at } => {
                TextEdit::insert(*at, format!(", {}", self.name))
            }
            ImportInsertion::EmptyNamedList { at } => {
                TextEdit::insert(*at, format!(" {} ", self.name))
            }
            ImportInsertion::AfterDefaultBinding { at } => {
                TextEdit::insert(*at, format!(", {{ {} }}", self.name))
            }
            ImportInsertion::Unsupported { reason } => {
                return Err(Error::missing_import(&unit.path, &self.module, reason.as_str()));
            }
        };

        self.record(unit, log, edit);
        Ok(ImportOutcome::Amended)
    }

    fn record(&self, unit: &SourceUnit, log: &mut EditLog, edit: TextEdit) {
        log.push(
            &unit.path,
            EditKind::AddNamedImport {
                module: self.module.clone(),
                name: self.name.clone(),
            },
            edit,
        );
        debug!(file = %unit.path.display(), module = %self.module, "Planned accessor import");
    }
}
