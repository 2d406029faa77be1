//! Provider constants

/// Extensions parsed with the TypeScript grammar
pub const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts", "mts", "cts"];

/// Extensions parsed with the TSX grammar
pub const TSX_EXTENSIONS: &[&str] = &["tsx"];

/// Tree-sitter query capturing class declarations
pub const CLASS_QUERY: &str = r"
[
  (class_declaration
    name: (type_identifier) @name
    body: (class_body) @body)
  (abstract_class_declaration
    name: (type_identifier) @name
    body: (class_body) @body)
] @class
";

/// Tree-sitter query capturing import statements with a module specifier
pub const IMPORT_QUERY: &str = r"
(import_statement
  source: (string) @source) @import
";
