//! Tests for the tree-sitter TypeScript parser

use inject_it_domain::{AnnotationKind, ImportInsertion, ParameterBinding, Scope};

use crate::test_utils::{end_of, parse};

const COMPONENT: &str = "\
import { Component, Optional, Self } from '@angular/core';

@Component({ selector: 'app-foo' })
export class FooComponent {
  constructor(private readonly foo: FooService, @Optional() @Self() bar: Bar) {}

  ngOnInit() {}
}
";

#[test]
fn test_reads_class_shape() {
    let unit = parse("foo.component.ts", COMPONENT);

    assert!(!unit.has_syntax_errors);
    assert_eq!(unit.classes.len(), 1);
    let class = &unit.classes[0];
    assert_eq!(class.name, "FooComponent");
    assert_eq!(class.member_indent, "  ");
    assert!(class.has_members);
    assert_eq!(class.body_start, end_of(COMPONENT, "class FooComponent {"));
}

#[test]
fn test_reads_constructor_parameters() {
    let unit = parse("foo.component.ts", COMPONENT);
    let class = &unit.classes[0];
    let params = class.constructor_parameters();

    assert_eq!(params.len(), 2);

    assert_eq!(params[0].name, "foo");
    assert_eq!(params[0].type_text.as_deref(), Some("FooService"));
    assert_eq!(params[0].scope, Some(Scope::Private));
    assert!(params[0].readonly);
    assert!(params[0].annotations.is_empty());

    assert_eq!(params[1].name, "bar");
    assert_eq!(params[1].type_text.as_deref(), Some("Bar"));
    assert_eq!(params[1].scope, None);
    assert!(!params[1].readonly);
    let kinds: Vec<&AnnotationKind> = params[1].annotations.iter().map(|a| &a.kind).collect();
    assert_eq!(kinds, [&AnnotationKind::Optional, &AnnotationKind::SelfOnly]);
    assert_eq!(params[1].annotations[0].text, "@Optional()");
}

#[test]
fn test_parameter_ranges_cover_decorators() {
    let unit = parse("foo.component.ts", COMPONENT);
    let ctor = unit.classes[0].constructor.as_ref().unwrap();

    let list = &COMPONENT[ctor.parameter_list.start..ctor.parameter_list.end];
    assert_eq!(
        list,
        "private readonly foo: FooService, @Optional() @Self() bar: Bar"
    );
    let bar = &ctor.parameters[1].range;
    assert_eq!(&COMPONENT[bar.start..bar.end], "@Optional() @Self() bar: Bar");
}

#[test]
fn test_inject_token_and_optional_marker() {
    let source = "\
export class TokenComponent {
    constructor(@Inject(BAR_TOKEN) bar: Bar, baz?: Baz, @Input() untyped) {}
}
";
    let unit = parse("token.component.ts", source);
    let params = unit.classes[0].constructor_parameters();

    assert_eq!(
        params[0].annotations[0].kind,
        AnnotationKind::Override {
            token: "BAR_TOKEN".to_string()
        }
    );
    assert_eq!(params[1].name, "baz");
    assert_eq!(params[1].type_text.as_deref(), Some("Baz"));
    assert_eq!(params[2].annotations[0].kind, AnnotationKind::Unrecognized);
    assert_eq!(params[2].type_text, None);
}

#[test]
fn test_empty_body_uses_default_indent() {
    let source = "export class EmptyComponent {}\n";
    let unit = parse("empty.component.ts", source);
    let class = &unit.classes[0];

    assert!(!class.has_members);
    assert_eq!(class.member_indent, "    ");
    assert!(class.constructor.is_none());
    assert!(class.constructor_parameters().is_empty());
}

#[test]
fn test_classes_in_source_order() {
    let source = "\
class AComponent {}
abstract class BComponent {}
export class CComponent {}
";
    let unit = parse("many.ts", source);
    let names: Vec<&str> = unit.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["AComponent", "BComponent", "CComponent"]);
}

#[test]
fn test_tsx_grammar() {
    let source = "\
export class ViewComponent {
  constructor(private host: Host) {}
  render() { return <div />; }
}
";
    let unit = parse("view.tsx", source);
    assert!(!unit.has_syntax_errors);
    assert_eq!(unit.classes[0].constructor_parameters()[0].name, "host");
}

#[test]
fn test_syntax_errors_are_flagged() {
    let unit = parse("broken.ts", "export class Broken {\n  constructor(a: A\n");
    assert!(unit.has_syntax_errors);
}

#[test]
fn test_named_import_insertion_point() {
    let unit = parse("foo.component.ts", COMPONENT);
    let import = &unit.imports[0];

    assert_eq!(import.module, "@angular/core");
    assert_eq!(import.named, ["Component", "Optional", "Self"]);
    assert!(!import.type_only);
    assert_eq!(
        import.insertion,
        ImportInsertion::AfterLastSpecifier {
            at: end_of(COMPONENT, "Self")
        }
    );
}

#[test]
fn test_import_variants() {
    let source = "\
import type { Type } from '@angular/core';
import {} from '@angular/core';
import core from '@angular/core';
import * as ng from '@angular/core';
import '@angular/core';
import { inject as resolve } from \"@angular/core\";
";
    let unit = parse("imports.ts", source);
    let imports = &unit.imports;
    assert_eq!(imports.len(), 6);

    assert!(imports[0].type_only);
    assert_eq!(
        imports[1].insertion,
        ImportInsertion::EmptyNamedList {
            at: end_of(source, "import {")
        }
    );
    assert_eq!(
        imports[2].insertion,
        ImportInsertion::AfterDefaultBinding {
            at: end_of(source, "import core")
        }
    );
    assert!(matches!(imports[3].insertion, ImportInsertion::Unsupported { .. }));
    assert!(matches!(imports[4].insertion, ImportInsertion::Unsupported { .. }));
    assert_eq!(imports[5].module, "@angular/core");
    assert!(imports[5].binds("resolve"));
    assert!(!imports[5].binds("inject"));
    assert!(!imports[0].binds("Type"));
    assert!(imports[0].binds_type_only("Type"));
}

#[test]
fn test_inline_type_specifiers_are_not_value_bindings() {
    let source = "import { Component, type inject, type Foo as Bar } from '@angular/core';\n";
    let unit = parse("inline.ts", source);
    let import = &unit.imports[0];

    assert_eq!(import.named, ["Component"]);
    assert!(!import.binds("inject"));
    assert!(import.binds_type_only("inject"));
    assert!(import.binds_type_only("Bar"));

    let spec = import.inline_type_specifier("inject").unwrap();
    assert_eq!(&source[spec.modifier.start..spec.modifier.end], "type ");
    assert_eq!(
        import.insertion,
        ImportInsertion::AfterLastSpecifier {
            at: end_of(source, "type Foo as Bar")
        }
    );
}

#[test]
fn test_parameter_modifiers_and_bindings() {
    let source = "\
class ChildComponent extends BaseComponent {
  constructor(public override readonly store: Store, ...extras: Extra[]) {}
}
";
    let unit = parse("child.component.ts", source);
    let parameters = unit.classes[0].constructor_parameters();

    assert!(parameters[0].is_override);
    assert!(parameters[0].readonly);
    assert_eq!(parameters[0].binding, ParameterBinding::Identifier);
    assert_eq!(parameters[1].name, "extras");
    assert_eq!(parameters[1].binding, ParameterBinding::Rest);
    assert_eq!(unit.classes[0].line_ending, "\n");
}
