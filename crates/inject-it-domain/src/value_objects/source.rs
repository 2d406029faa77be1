//! Source snapshot
//!
//! Read-only view of the parsed project. Offsets are byte offsets into
//! [`SourceUnit::text`] as it was loaded; edits never change the snapshot,
//! they are recorded in an [`EditLog`](super::EditLog) against these offsets.

use crate::value_objects::annotation::AnnotationToken;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Half-open byte range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// First byte of the range
    pub start: usize,
    /// One past the last byte of the range
    pub end: usize,
}

impl TextRange {
    /// Create a new range
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Empty range at `offset`, used for insertions
    pub const fn empty(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length in bytes
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for insertion points
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Member visibility keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
}

impl Scope {
    /// Parse an accessibility modifier keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    /// Keyword as written in source
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Shape of the binding a parameter declares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParameterBinding {
    /// A plain identifier
    #[default]
    Identifier,
    /// `...name`
    Rest,
    /// An object or array destructuring pattern
    Destructured,
}

/// One constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter identifier; the pattern text for destructured parameters
    pub name: String,
    /// Binding shape
    pub binding: ParameterBinding,
    /// Declared type text, without the leading colon
    pub type_text: Option<String>,
    /// `readonly` modifier present
    pub readonly: bool,
    /// `override` modifier present
    pub is_override: bool,
    /// Accessibility modifier, if any
    pub scope: Option<Scope>,
    /// Decorators in attachment order
    pub annotations: Vec<AnnotationToken>,
    /// Source range of the whole parameter, decorators included
    pub range: TextRange,
}

impl ParameterSpec {
    /// Create a plain parameter `name: type_text`
    pub fn new(name: impl Into<String>, type_text: Option<&str>) -> Self {
        Self {
            name: name.into(),
            binding: ParameterBinding::Identifier,
            type_text: type_text.map(str::to_string),
            readonly: false,
            is_override: false,
            scope: None,
            annotations: Vec::new(),
            range: TextRange::default(),
        }
    }

    /// Set the accessibility modifier
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Mark the parameter `readonly`
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Mark the parameter `override`
    pub fn with_override(mut self, is_override: bool) -> Self {
        self.is_override = is_override;
        self
    }

    /// Set the binding shape
    pub fn with_binding(mut self, binding: ParameterBinding) -> Self {
        self.binding = binding;
        self
    }

    /// Attach a decorator
    pub fn with_annotation(mut self, annotation: AnnotationToken) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set the source range
    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }
}

impl Default for TextRange {
    fn default() -> Self {
        Self::empty(0)
    }
}

/// The implementation constructor of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    /// Parameters in declaration order
    pub parameters: Vec<ParameterSpec>,
    /// Bytes between the parentheses of the parameter list
    pub parameter_list: TextRange,
    /// Number of `constructor(...);` overload signatures
    pub overloads: usize,
}

/// A class declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntity {
    /// Class identifier
    pub name: String,
    /// Owning unit
    pub file: PathBuf,
    /// Source range of the declaration
    pub range: TextRange,
    /// Offset just past the opening brace of the class body
    pub body_start: usize,
    /// Indentation used for members of this class
    pub member_indent: String,
    /// Whether the body already declares members
    pub has_members: bool,
    /// Line terminator used by the owning file, `"\n"` or `"\r\n"`
    pub line_ending: &'static str,
    /// Implementation constructor, if declared
    pub constructor: Option<ConstructorDecl>,
}

impl ClassEntity {
    /// Constructor parameters in declaration order; empty without a constructor
    pub fn constructor_parameters(&self) -> &[ParameterSpec] {
        match &self.constructor {
            Some(ctor) => &ctor.parameters,
            None => &[],
        }
    }

    /// `path#Name` identifier used in reports
    pub fn qualified_name(&self) -> String {
        format!("{}#{}", self.file.display(), self.name)
    }
}

/// Where a new named specifier can be added to an import statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportInsertion {
    /// Append after the last specifier of a non-empty `{ ... }` list
    AfterLastSpecifier {
        /// Offset just past the last specifier
        at: usize,
    },
    /// Fill an empty `{}` list
    EmptyNamedList {
        /// Offset just past the opening brace
        at: usize,
    },
    /// Add a `{ ... }` list after a default import binding
    AfterDefaultBinding {
        /// Offset just past the default binding
        at: usize,
    },
    /// The statement cannot carry a named value import
    Unsupported {
        /// Why the statement cannot be amended
        reason: String,
    },
}

/// A named specifier carrying its own `type` modifier, as in `{ type Foo }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOnlySpecifier {
    /// Local name bound for type positions only
    pub name: String,
    /// The `type` keyword and the blanks after it
    pub modifier: TextRange,
}

/// One `import ... from 'module'` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// Module specifier without quotes
    pub module: String,
    /// Local names bound by the named specifiers, inline `type` ones excluded
    pub named: Vec<String>,
    /// Named specifiers marked `type` inline
    pub type_only_named: Vec<TypeOnlySpecifier>,
    /// `import type { ... }`
    pub type_only: bool,
    /// Source range of the statement
    pub range: TextRange,
    /// How a named specifier can be added
    pub insertion: ImportInsertion,
}

impl ImportDeclaration {
    /// Whether `name` is bound as a value by this statement
    pub fn binds(&self, name: &str) -> bool {
        !self.type_only && self.named.iter().any(|bound| bound == name)
    }

    /// Whether `name` is bound by this statement for type positions only
    pub fn binds_type_only(&self, name: &str) -> bool {
        (self.type_only && self.named.iter().any(|bound| bound == name))
            || self.inline_type_specifier(name).is_some()
    }

    /// The inline `type name` specifier, if this statement has one
    pub fn inline_type_specifier(&self, name: &str) -> Option<&TypeOnlySpecifier> {
        if self.type_only {
            return None;
        }
        self.type_only_named.iter().find(|spec| spec.name == name)
    }
}

/// One parsed source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Path of the file on disk
    pub path: PathBuf,
    /// Path relative to the project root, used for glob matching
    pub relative_path: PathBuf,
    /// Text as loaded
    pub text: String,
    /// Class declarations in source order
    pub classes: Vec<ClassEntity>,
    /// Import statements in source order
    pub imports: Vec<ImportDeclaration>,
    /// The parser had to recover from syntax errors
    pub has_syntax_errors: bool,
}

impl SourceUnit {
    /// Imports whose module specifier equals `module`, in source order
    pub fn imports_from<'a>(
        &'a self,
        module: &'a str,
    ) -> impl Iterator<Item = &'a ImportDeclaration> + 'a {
        self.imports.iter().filter(move |import| import.module == module)
    }
}

/// Explicit project context handed to every component that reads the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    /// Root directory the project was loaded from
    pub root: PathBuf,
    /// Loaded units, sorted by path
    pub units: Vec<SourceUnit>,
}

impl Project {
    /// Create a project from already loaded units
    pub fn new(root: impl Into<PathBuf>, mut units: Vec<SourceUnit>) -> Self {
        units.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            root: root.into(),
            units,
        }
    }

    /// Unit loaded from `path`
    pub fn unit(&self, path: &Path) -> Option<&SourceUnit> {
        self.units.iter().find(|unit| unit.path == path)
    }

    /// Every class in the project, units in path order, classes in source order
    pub fn classes(&self) -> impl Iterator<Item = (&SourceUnit, &ClassEntity)> {
        self.units
            .iter()
            .flat_map(|unit| unit.classes.iter().map(move |class| (unit, class)))
    }
}
