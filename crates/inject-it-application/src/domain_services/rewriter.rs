//! Member Rewriter
//!
//! Promotes every constructor parameter of a class to a field initialized by
//! the accessor call, then removes the parameters. The constructor itself
//! stays, even when it ends up empty.

use super::accessor::AccessorExpressionBuilder;
use inject_it_domain::{
    ClassEntity, ConstructorDecl, EditKind, EditLog, Error, FieldSpec, ParameterBinding,
    ParameterSpec, Result, TextEdit, TextRange,
};
use tracing::debug;

/// Result of rewriting one class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The class has no constructor parameters
    Unchanged,
    /// Parameters were promoted to this many fields
    Rewritten {
        /// Number of inserted fields
        fields: usize,
    },
}

/// Plans the member edits for one class at a time
#[derive(Debug, Clone)]
pub struct MemberRewriter {
    builder: AccessorExpressionBuilder,
}

impl MemberRewriter {
    /// Create a rewriter using `builder` for initializers
    pub fn new(builder: AccessorExpressionBuilder) -> Self {
        Self { builder }
    }

    /// One field per constructor parameter, in parameter order
    pub fn plan_fields(&self, class: &ClassEntity) -> Result<Vec<FieldSpec>> {
        class
            .constructor_parameters()
            .iter()
            .map(|parameter| self.field_for(&class.name, parameter))
            .collect()
    }

    fn field_for(&self, class: &str, parameter: &ParameterSpec) -> Result<FieldSpec> {
        Ok(FieldSpec {
            name: parameter.name.clone(),
            type_text: parameter.type_text.clone(),
            readonly: parameter.readonly,
            is_override: parameter.is_override,
            scope: parameter.scope,
            initializer: self.builder.build(class, parameter)?,
        })
    }

    /// Record the field insertion and the parameter removals for `class`
    ///
    /// Nothing is recorded when a parameter has no usable target token, when
    /// a parameter is a rest or destructuring pattern, or when the constructor
    /// has overload signatures.
    pub fn rewrite(&self, class: &ClassEntity, log: &mut EditLog) -> Result<RewriteOutcome> {
        let Some(constructor) = class.constructor.as_ref() else {
            return Ok(RewriteOutcome::Unchanged);
        };
        let parameters = &constructor.parameters;
        if parameters.is_empty() {
            return Ok(RewriteOutcome::Unchanged);
        }

        check_supported(class, constructor)?;
        let fields = self.plan_fields(class)?;

        log.push(
            &class.file,
            EditKind::InsertFields {
                class: class.name.clone(),
                fields: fields.iter().map(|field| field.name.clone()).collect(),
            },
            TextEdit::insert(class.body_start, field_block(&fields, class)),
        );

        // Parameter ranges are widened until they tile the list, so separators go too
        for (index, parameter) in parameters.iter().enumerate() {
            let start = if index == 0 {
                constructor.parameter_list.start
            } else {
                parameter.range.start
            };
            let end = parameters
                .get(index + 1)
                .map_or(constructor.parameter_list.end, |next| next.range.start);

            log.push(
                &class.file,
                EditKind::RemoveParameter {
                    class: class.name.clone(),
                    parameter: parameter.name.clone(),
                },
                TextEdit::delete(TextRange::new(start, end)),
            );
        }

        debug!(class = %class.name, fields = fields.len(), "Planned member rewrite");
        Ok(RewriteOutcome::Rewritten {
            fields: fields.len(),
        })
    }
}

/// Overloads would keep parameters the implementation no longer has
fn check_supported(class: &ClassEntity, constructor: &ConstructorDecl) -> Result<()> {
    if constructor.overloads > 0 {
        return Err(Error::unsupported_constructor(
            &class.name,
            format!("{} constructor overload signature(s)", constructor.overloads),
        ));
    }
    for parameter in &constructor.parameters {
        match parameter.binding {
            ParameterBinding::Identifier => {}
            ParameterBinding::Rest => {
                return Err(Error::unsupported_constructor(
                    &class.name,
                    format!("rest parameter `...{}` has no field form", parameter.name),
                ));
            }
            ParameterBinding::Destructured => {
                return Err(Error::unsupported_constructor(
                    &class.name,
                    format!("destructured parameter `{}` has no field form", parameter.name),
                ));
            }
        }
    }
    Ok(())
}

fn field_block(fields: &[FieldSpec], class: &ClassEntity) -> String {
    let newline = class.line_ending;
    let mut block: String = fields
        .iter()
        .map(|field| format!("{newline}{}{}", class.member_indent, field.render()))
        .collect();
    if class.has_members {
        block.push_str(newline);
    }
    block
}
