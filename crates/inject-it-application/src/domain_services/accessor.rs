//! Accessor-Expression Builder
//!
//! Produces the initializer text `accessor(target)` or
//! `accessor(target,{...options})` for one constructor parameter.

use super::annotations::map_annotations;
use super::options::serialize_options;
use inject_it_domain::{Error, ParameterSpec, Result};

/// Builds accessor call expressions for a configured accessor function
#[derive(Debug, Clone)]
pub struct AccessorExpressionBuilder {
    function: String,
}

impl AccessorExpressionBuilder {
    /// Create a builder calling `function`
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
        }
    }

    /// Accessor function name
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Token identifying the dependency: the `@Inject` argument if present,
    /// otherwise the declared type
    pub fn target_token<'p>(&self, class: &str, parameter: &'p ParameterSpec) -> Result<&'p str> {
        parameter
            .annotations
            .iter()
            .find_map(|annotation| annotation.kind.override_token())
            .or(parameter.type_text.as_deref())
            .ok_or_else(|| Error::malformed_parameter(class, &parameter.name))
    }

    /// Initializer expression for `parameter` of class `class`
    ///
    /// ```
    /// use inject_it_application::AccessorExpressionBuilder;
    /// use inject_it_domain::ParameterSpec;
    ///
    /// let builder = AccessorExpressionBuilder::new("inject");
    /// let parameter = ParameterSpec::new("foo", Some("FooService"));
    /// assert_eq!(builder.build("AComponent", &parameter).unwrap(), "inject(FooService)");
    /// ```
    pub fn build(&self, class: &str, parameter: &ParameterSpec) -> Result<String> {
        let target = self.target_token(class, parameter)?;
        let options = serialize_options(&map_annotations(&parameter.annotations));

        if options.is_empty() {
            Ok(format!("{}({target})", self.function))
        } else {
            Ok(format!("{}({target},{options})", self.function))
        }
    }
}
