//! TypeScript parser
//!
//! Parses `.ts`/`.mts`/`.cts` with the TypeScript grammar and `.tsx` with
//! the TSX grammar, then reads classes and imports out of the syntax tree
//! with tree-sitter queries. Everything the engine needs (ranges, member
//! indentation, import insertion points) is computed here so the domain
//! snapshot never refers back to the tree.

use std::path::{Path, PathBuf};

use inject_it_domain::constants::DEFAULT_MEMBER_INDENT;
use inject_it_domain::{
    AnnotationKind, AnnotationToken, ClassEntity, ConstructorDecl, Error, ImportDeclaration,
    ImportInsertion, ParameterBinding, ParameterSpec, Result, Scope, SourceUnit, TextRange,
    TypeOnlySpecifier,
};
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, StreamingIterator, Tree};

use crate::constants::{CLASS_QUERY, IMPORT_QUERY, TSX_EXTENSIONS, TYPESCRIPT_EXTENSIONS};

/// Grammar with its compiled queries
///
/// Node kind ids differ between the TypeScript and TSX grammars, so each
/// grammar carries its own copy of the queries.
struct Grammar {
    language: Language,
    classes: Query,
    imports: Query,
    class_capture: u32,
    name_capture: u32,
    body_capture: u32,
    import_capture: u32,
    source_capture: u32,
}

impl Grammar {
    fn new(language: Language) -> Result<Self> {
        let classes = Query::new(&language, CLASS_QUERY)
            .map_err(|e| Error::tree_with_source("Invalid class query", e))?;
        let imports = Query::new(&language, IMPORT_QUERY)
            .map_err(|e| Error::tree_with_source("Invalid import query", e))?;
        Ok(Self {
            class_capture: capture_index(&classes, "class")?,
            name_capture: capture_index(&classes, "name")?,
            body_capture: capture_index(&classes, "body")?,
            import_capture: capture_index(&imports, "import")?,
            source_capture: capture_index(&imports, "source")?,
            language,
            classes,
            imports,
        })
    }
}

fn capture_index(query: &Query, name: &str) -> Result<u32> {
    query
        .capture_index_for_name(name)
        .ok_or_else(|| Error::tree(format!("Query has no @{name} capture")))
}

/// Tree-sitter backed parser producing [`SourceUnit`]s
pub struct TypeScriptParser {
    typescript: Grammar,
    tsx: Grammar,
}

impl TypeScriptParser {
    /// Compile the grammars and queries
    pub fn new() -> Result<Self> {
        Ok(Self {
            typescript: Grammar::new(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())?,
            tsx: Grammar::new(tree_sitter_typescript::LANGUAGE_TSX.into())?,
        })
    }

    /// Whether `path` has an extension this parser handles
    pub fn supports(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                TYPESCRIPT_EXTENSIONS.contains(&ext) || TSX_EXTENSIONS.contains(&ext)
            })
    }

    fn grammar_for(&self, path: &Path) -> &Grammar {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if TSX_EXTENSIONS.contains(&ext) => &self.tsx,
            _ => &self.typescript,
        }
    }

    /// Parse `text` loaded from `path` into a source unit
    ///
    /// Syntax errors do not fail the parse: tree-sitter recovers and the unit
    /// is flagged with [`SourceUnit::has_syntax_errors`].
    pub fn parse(
        &self,
        path: impl Into<PathBuf>,
        relative_path: impl Into<PathBuf>,
        text: String,
    ) -> Result<SourceUnit> {
        let path = path.into();
        let grammar = self.grammar_for(&path);

        let mut parser = Parser::new();
        parser
            .set_language(&grammar.language)
            .map_err(|e| Error::tree_with_source("Failed to load TypeScript grammar", e))?;
        let tree = parser
            .parse(&text, None)
            .ok_or_else(|| Error::tree(format!("Failed to parse {}", path.display())))?;

        let classes = extract_classes(grammar, &tree, &text, &path);
        let imports = extract_imports(grammar, &tree, &text);
        let has_syntax_errors = tree.root_node().has_error();
        if has_syntax_errors {
            tracing::warn!(file = %path.display(), "Syntax errors, parsed with recovery");
        }

        Ok(SourceUnit {
            relative_path: relative_path.into(),
            path,
            text,
            classes,
            imports,
            has_syntax_errors,
        })
    }
}

fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

fn range(node: Node<'_>) -> TextRange {
    TextRange::new(node.start_byte(), node.end_byte())
}

// ============================================================================
// Classes
// ============================================================================

fn extract_classes(grammar: &Grammar, tree: &Tree, source: &str, path: &Path) -> Vec<ClassEntity> {
    let line_ending = line_ending(source);
    let mut classes = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&grammar.classes, tree.root_node(), source.as_bytes());

    while let Some(m) = matches.next() {
        let mut class = None;
        let mut name = None;
        let mut body = None;
        for capture in m.captures {
            match capture.index {
                i if i == grammar.class_capture => class = Some(capture.node),
                i if i == grammar.name_capture => name = Some(capture.node),
                i if i == grammar.body_capture => body = Some(capture.node),
                _ => {}
            }
        }
        let (Some(class), Some(name), Some(body)) = (class, name, body) else {
            continue;
        };

        classes.push(ClassEntity {
            name: text(name, source).to_string(),
            file: path.to_path_buf(),
            range: range(class),
            body_start: body.start_byte() + 1,
            member_indent: member_indent(body, source),
            has_members: members(body).next().is_some(),
            line_ending,
            constructor: find_constructor(body, source),
        });
    }

    classes.sort_by_key(|class| class.range.start);
    classes
}

fn members<'t>(body: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect::<Vec<_>>()
        .into_iter()
}

/// Indentation of the first member, or the class line's plus one level
fn member_indent(body: Node<'_>, source: &str) -> String {
    let mut cursor = body.walk();
    let first = body.named_children(&mut cursor).next();
    if let Some(indent) = first.and_then(|member| whitespace_prefix(source, member.start_byte())) {
        return indent.to_string();
    }
    format!("{}{DEFAULT_MEMBER_INDENT}", line_indent(source, body.start_byte()))
}

/// Terminator of the first line; files without line breaks use `\n`
fn line_ending(source: &str) -> &'static str {
    match source.find('\n') {
        Some(newline) if source[..newline].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind('\n').map_or(0, |newline| newline + 1)
}

/// Text between the start of the line and `offset`, if it is only blanks
fn whitespace_prefix(source: &str, offset: usize) -> Option<&str> {
    let prefix = &source[line_start(source, offset)..offset];
    prefix.chars().all(|c| c == ' ' || c == '\t').then_some(prefix)
}

/// Leading blanks of the line containing `offset`
fn line_indent(source: &str, offset: usize) -> &str {
    let line = &source[line_start(source, offset)..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

fn is_constructor(member: Node<'_>, source: &str) -> bool {
    member
        .child_by_field_name("name")
        .is_some_and(|name| text(name, source) == "constructor")
}

fn find_constructor(body: Node<'_>, source: &str) -> Option<ConstructorDecl> {
    let ctor = members(body)
        .find(|member| member.kind() == "method_definition" && is_constructor(*member, source))?;
    let list = ctor.child_by_field_name("parameters")?;
    let overloads = members(body)
        .filter(|member| member.kind() == "method_signature" && is_constructor(*member, source))
        .count();

    let mut cursor = list.walk();
    let parameters = list
        .named_children(&mut cursor)
        .filter(|param| matches!(param.kind(), "required_parameter" | "optional_parameter"))
        .map(|param| parse_parameter(param, source))
        .collect();

    Some(ConstructorDecl {
        parameters,
        parameter_list: TextRange::new(list.start_byte() + 1, list.end_byte().saturating_sub(1)),
        overloads,
    })
}

fn parse_parameter(param: Node<'_>, source: &str) -> ParameterSpec {
    let pattern = param.child_by_field_name("pattern");
    let (name, binding) = match pattern {
        Some(rest) if rest.kind() == "rest_pattern" => {
            let inner = rest.named_child(0).map_or("", |inner| text(inner, source));
            (inner, ParameterBinding::Rest)
        }
        Some(pattern) if matches!(pattern.kind(), "object_pattern" | "array_pattern") => {
            (text(pattern, source), ParameterBinding::Destructured)
        }
        Some(pattern) => (text(pattern, source), ParameterBinding::Identifier),
        None => ("", ParameterBinding::Identifier),
    };
    let type_text = param
        .child_by_field_name("type")
        .and_then(|annotation| annotation.named_child(0))
        .map(|ty| text(ty, source));

    let mut spec = ParameterSpec::new(name, type_text)
        .with_binding(binding)
        .with_range(range(param));
    let mut cursor = param.walk();
    for child in param.children(&mut cursor) {
        match child.kind() {
            "decorator" => spec = spec.with_annotation(parse_decorator(child, source)),
            "accessibility_modifier" => {
                if let Some(scope) = Scope::from_keyword(text(child, source)) {
                    spec = spec.with_scope(scope);
                }
            }
            "override_modifier" => spec = spec.with_override(true),
            "readonly" => spec = spec.with_readonly(true),
            _ => {}
        }
    }
    spec
}

/// Classify `@Name`, `@Name(args)` and their member-expression forms
fn parse_decorator(decorator: Node<'_>, source: &str) -> AnnotationToken {
    let full = text(decorator, source);
    let Some(expression) = decorator.named_child(0) else {
        return AnnotationToken::new(full, AnnotationKind::Unrecognized);
    };

    let kind = match expression.kind() {
        "call_expression" => {
            let name = expression
                .child_by_field_name("function")
                .map_or("", |function| text(function, source));
            let arguments: Vec<String> = expression
                .child_by_field_name("arguments")
                .map(|args| {
                    let mut cursor = args.walk();
                    args.named_children(&mut cursor)
                        .filter(|arg| arg.kind() != "comment")
                        .map(|arg| text(arg, source).to_string())
                        .collect()
                })
                .unwrap_or_default();
            AnnotationKind::classify(name, Some(arguments.as_slice()))
        }
        _ => AnnotationKind::classify(text(expression, source), None),
    };
    AnnotationToken::new(full, kind)
}

// ============================================================================
// Imports
// ============================================================================

fn extract_imports(grammar: &Grammar, tree: &Tree, source: &str) -> Vec<ImportDeclaration> {
    let mut imports = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&grammar.imports, tree.root_node(), source.as_bytes());

    while let Some(m) = matches.next() {
        let statement = m
            .captures
            .iter()
            .find(|capture| capture.index == grammar.import_capture)
            .map(|capture| capture.node);
        let specifier = m
            .captures
            .iter()
            .find(|capture| capture.index == grammar.source_capture)
            .map(|capture| capture.node);
        if let (Some(statement), Some(specifier)) = (statement, specifier) {
            imports.push(parse_import(statement, specifier, source));
        }
    }

    imports.sort_by_key(|import| import.range.start);
    imports
}

fn parse_import(statement: Node<'_>, specifier: Node<'_>, source: &str) -> ImportDeclaration {
    let module = text(specifier, source)
        .trim_matches(|c| c == '\'' || c == '"')
        .to_string();

    let mut cursor = statement.walk();
    let children: Vec<Node<'_>> = statement.children(&mut cursor).collect();
    let type_only = children
        .iter()
        .any(|child| !child.is_named() && child.kind() == "type");
    let clause = children.iter().find(|child| child.kind() == "import_clause");

    let clause = match clause {
        Some(clause) => parse_clause(*clause, source),
        None => ImportClause::without_bindings("side-effect import has no bindings"),
    };

    ImportDeclaration {
        module,
        named: clause.named,
        type_only_named: clause.type_only_named,
        type_only,
        range: range(statement),
        insertion: clause.insertion,
    }
}

/// Bindings of an import clause and where a new specifier would go
struct ImportClause {
    named: Vec<String>,
    type_only_named: Vec<TypeOnlySpecifier>,
    insertion: ImportInsertion,
}

impl ImportClause {
    fn without_bindings(reason: &str) -> Self {
        Self {
            named: Vec::new(),
            type_only_named: Vec::new(),
            insertion: ImportInsertion::Unsupported {
                reason: reason.to_string(),
            },
        }
    }
}

fn parse_clause(clause: Node<'_>, source: &str) -> ImportClause {
    let mut cursor = clause.walk();
    let parts: Vec<Node<'_>> = clause.named_children(&mut cursor).collect();

    if let Some(list) = parts.iter().find(|part| part.kind() == "named_imports") {
        let mut cursor = list.walk();
        let specifiers: Vec<Node<'_>> = list
            .named_children(&mut cursor)
            .filter(|spec| spec.kind() == "import_specifier")
            .collect();

        let mut named = Vec::new();
        let mut type_only_named = Vec::new();
        for spec in &specifiers {
            let Some(local) = spec
                .child_by_field_name("alias")
                .or_else(|| spec.child_by_field_name("name"))
            else {
                continue;
            };
            let local_name = text(local, source).to_string();
            match type_modifier(*spec) {
                Some(modifier) => type_only_named.push(TypeOnlySpecifier {
                    name: local_name,
                    modifier,
                }),
                None => named.push(local_name),
            }
        }

        let insertion = match specifiers.last() {
            Some(last) => ImportInsertion::AfterLastSpecifier { at: last.end_byte() },
            None => ImportInsertion::EmptyNamedList {
                at: list.start_byte() + 1,
            },
        };
        return ImportClause {
            named,
            type_only_named,
            insertion,
        };
    }

    if parts.iter().any(|part| part.kind() == "namespace_import") {
        return ImportClause::without_bindings("namespace import cannot carry named bindings");
    }

    match parts.iter().find(|part| part.kind() == "identifier") {
        Some(default) => ImportClause {
            named: Vec::new(),
            type_only_named: Vec::new(),
            insertion: ImportInsertion::AfterDefaultBinding {
                at: default.end_byte(),
            },
        },
        None => ImportClause::without_bindings("unrecognized import clause"),
    }
}

/// Range of a leading `type` keyword up to the imported name
fn type_modifier(spec: Node<'_>) -> Option<TextRange> {
    let keyword = spec.child(0).filter(|first| !first.is_named() && first.kind() == "type")?;
    let name = spec.child_by_field_name("name")?;
    Some(TextRange::new(keyword.start_byte(), name.start_byte()))
}
