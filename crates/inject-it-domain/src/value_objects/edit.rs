//! Edit log
//!
//! The engine never mutates the snapshot. Every structural change is
//! recorded here as a text replacement keyed by file, and the provider
//! applies the whole log in one batch at commit time.

use crate::value_objects::source::TextRange;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Replace `range` with `replacement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Bytes being replaced; empty for insertions
    pub range: TextRange,
    /// New text
    pub replacement: String,
}

impl TextEdit {
    /// Insert `text` at `offset`
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            range: TextRange::empty(offset),
            replacement: text.into(),
        }
    }

    /// Delete `range`
    pub fn delete(range: TextRange) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }
}

/// What a planned edit does, for logs and failure reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// Promoted fields inserted at the top of a class body
    InsertFields {
        /// Class receiving the fields
        class: String,
        /// Field names in insertion order
        fields: Vec<String>,
    },
    /// A constructor parameter removed
    RemoveParameter {
        /// Class owning the constructor
        class: String,
        /// Removed parameter
        parameter: String,
    },
    /// A named specifier added to an import statement
    AddNamedImport {
        /// Module specifier of the amended statement
        module: String,
        /// Added name
        name: String,
    },
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsertFields { class, fields } => {
                write!(f, "insert field(s) {} into class `{class}`", fields.join(", "))
            }
            Self::RemoveParameter { class, parameter } => {
                write!(f, "remove constructor parameter `{parameter}` from class `{class}`")
            }
            Self::AddNamedImport { module, name } => {
                write!(f, "import `{name}` from `{module}`")
            }
        }
    }
}

/// One entry of the edit log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEdit {
    /// File the edit applies to
    pub file: PathBuf,
    /// Intent of the edit
    pub kind: EditKind,
    /// The text replacement
    pub edit: TextEdit,
}

impl fmt::Display for PlannedEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.kind)
    }
}

/// Ordered list of planned edits across the project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditLog {
    edits: Vec<PlannedEdit>,
}

impl EditLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit
    pub fn push(&mut self, file: impl Into<PathBuf>, kind: EditKind, edit: TextEdit) {
        self.edits.push(PlannedEdit {
            file: file.into(),
            kind,
            edit,
        });
    }

    /// Number of recorded edits
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// True when nothing is planned
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Position to roll back to if the following edits must be discarded
    pub fn checkpoint(&self) -> usize {
        self.edits.len()
    }

    /// Discard every edit recorded after `checkpoint`
    pub fn rollback(&mut self, checkpoint: usize) {
        self.edits.truncate(checkpoint);
    }

    /// Edits in the order they were recorded
    pub fn iter(&self) -> impl Iterator<Item = &PlannedEdit> {
        self.edits.iter()
    }

    /// Edits for one file, in recorded order
    pub fn for_file<'a>(&'a self, file: &'a Path) -> impl Iterator<Item = &'a PlannedEdit> + 'a {
        self.edits.iter().filter(move |planned| planned.file == file)
    }

    /// Files with at least one edit, sorted
    pub fn files(&self) -> BTreeSet<&Path> {
        self.edits.iter().map(|planned| planned.file.as_path()).collect()
    }

    /// Whether an import of `name` from `module` is already planned for `file`
    pub fn has_named_import(&self, file: &Path, module: &str, name: &str) -> bool {
        self.for_file(file).any(|planned| {
            matches!(
                &planned.kind,
                EditKind::AddNamedImport { module: m, name: n } if m == module && n == name
            )
        })
    }

    /// Human-readable description of every edit
    pub fn descriptions(&self) -> Vec<String> {
        self.edits.iter().map(ToString::to_string).collect()
    }
}

/// Edits for one file could not be applied together
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditConflict {
    /// The range is outside the text or splits a UTF-8 sequence
    #[error("edit range {}..{} is invalid for a text of {len} bytes", .range.start, .range.end)]
    InvalidRange {
        /// Offending range
        range: TextRange,
        /// Length of the text
        len: usize,
    },
    /// Two edits touch the same bytes
    #[error(
        "edit range {}..{} overlaps {}..{}",
        .second.start,
        .second.end,
        .first.start,
        .first.end
    )]
    Overlap {
        /// Range applied first
        first: TextRange,
        /// Range overlapping it
        second: TextRange,
    },
}

/// Apply edits to `text`
///
/// Edits are applied in offset order; edits at the same offset keep the
/// order in which they were given.
///
/// ```
/// use inject_it_domain::{TextEdit, TextRange, apply_edits};
///
/// let edits = [
///     TextEdit::delete(TextRange::new(4, 8)),
///     TextEdit::insert(0, "let "),
/// ];
/// assert_eq!(apply_edits("abc dead", &edits).unwrap(), "let abc ");
/// ```
pub fn apply_edits<'a, I>(text: &str, edits: I) -> Result<String, EditConflict>
where
    I: IntoIterator<Item = &'a TextEdit>,
{
    let mut ordered: Vec<(usize, &TextEdit)> = edits.into_iter().enumerate().collect();
    ordered.sort_by(|(seq_a, a), (seq_b, b)| {
        a.range
            .start
            .cmp(&b.range.start)
            .then(a.range.end.cmp(&b.range.end))
            .then(seq_a.cmp(seq_b))
    });

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut previous: Option<TextRange> = None;

    for (_, edit) in ordered {
        let range = edit.range;
        if range.start > range.end
            || range.end > text.len()
            || !text.is_char_boundary(range.start)
            || !text.is_char_boundary(range.end)
        {
            return Err(EditConflict::InvalidRange {
                range,
                len: text.len(),
            });
        }
        if range.start < cursor {
            return Err(EditConflict::Overlap {
                first: previous.unwrap_or(range),
                second: range,
            });
        }
        output.push_str(&text[cursor..range.start]);
        output.push_str(&edit.replacement);
        cursor = range.end;
        previous = Some(range);
    }

    output.push_str(&text[cursor..]);
    Ok(output)
}

/// Before/after text of one file, produced without touching storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePreview {
    /// File the preview is for
    pub path: PathBuf,
    /// Text as loaded
    pub before: String,
    /// Text after applying the planned edits
    pub after: String,
}
