//! Tests for field rendering

use inject_it_domain::{FieldSpec, Scope};

fn field(scope: Option<Scope>, readonly: bool, type_text: Option<&str>) -> FieldSpec {
    FieldSpec {
        name: "foo".to_string(),
        type_text: type_text.map(str::to_string),
        readonly,
        is_override: false,
        scope,
        initializer: "inject(FooService)".to_string(),
    }
}

#[test]
fn test_plain_field() {
    assert_eq!(
        field(None, false, Some("FooService")).render(),
        "foo: FooService = inject(FooService);"
    );
}

#[test]
fn test_scope_and_readonly_are_copied() {
    assert_eq!(
        field(Some(Scope::Private), true, Some("FooService")).render(),
        "private readonly foo: FooService = inject(FooService);"
    );
    assert_eq!(
        field(Some(Scope::Protected), false, Some("FooService")).render(),
        "protected foo: FooService = inject(FooService);"
    );
}

#[test]
fn test_untyped_field_omits_annotation() {
    assert_eq!(field(None, true, None).render(), "readonly foo = inject(FooService);");
}

#[test]
fn test_override_sits_between_scope_and_readonly() {
    let mut field = field(Some(Scope::Protected), true, Some("FooService"));
    field.is_override = true;
    assert_eq!(
        field.render(),
        "protected override readonly foo: FooService = inject(FooService);"
    );
}
