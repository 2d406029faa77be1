//! Replacement field declarations

use crate::value_objects::source::Scope;
use std::fmt;

/// A class field replacing one constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, copied from the parameter
    pub name: String,
    /// Declared type, copied from the parameter
    pub type_text: Option<String>,
    /// `readonly` modifier, copied from the parameter
    pub readonly: bool,
    /// `override` modifier, copied from the parameter
    pub is_override: bool,
    /// Accessibility modifier, copied from the parameter
    pub scope: Option<Scope>,
    /// Accessor call expression
    pub initializer: String,
}

impl FieldSpec {
    /// Declaration text, e.g. `private readonly foo: Foo = inject(Foo);`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scope) = self.scope {
            write!(f, "{scope} ")?;
        }
        if self.is_override {
            f.write_str("override ")?;
        }
        if self.readonly {
            f.write_str("readonly ")?;
        }
        f.write_str(&self.name)?;
        if let Some(type_text) = &self.type_text {
            write!(f, ": {type_text}")?;
        }
        write!(f, " = {};", self.initializer)
    }
}
