//! Parameter annotations
//!
//! Decorators attached to a constructor parameter are classified once, when
//! the source is read. The engine only ever matches on [`AnnotationKind`].

use crate::constants::{
    HOST_DECORATOR, INJECT_DECORATOR, OPTIONAL_DECORATOR, SELF_DECORATOR, SKIP_SELF_DECORATOR,
};
use crate::value_objects::options::ResolutionOption;

/// Closed set of annotation kinds the migration understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationKind {
    /// `@Optional()`
    Optional,
    /// `@Self()`
    SelfOnly,
    /// `@SkipSelf()`
    SkipSelf,
    /// `@Host()`
    Host,
    /// `@Inject(token)`: resolve `token` instead of the declared type
    Override {
        /// Verbatim source text of the first argument
        token: String,
    },
    /// Any other decorator. Neither mapped nor preserved.
    Unrecognized,
}

impl AnnotationKind {
    /// Classify a decorator by name and call arguments
    ///
    /// `arguments` is `None` for a bare decorator (`@Optional`) and holds the
    /// verbatim argument texts for the call form (`@Inject(TOKEN)`).
    ///
    /// ```
    /// use inject_it_domain::AnnotationKind;
    ///
    /// let no_args: &[String] = &[];
    /// let token = vec!["BAR_TOKEN".to_string()];
    ///
    /// assert_eq!(AnnotationKind::classify("Optional", Some(no_args)), AnnotationKind::Optional);
    /// assert_eq!(
    ///     AnnotationKind::classify("Inject", Some(token.as_slice())),
    ///     AnnotationKind::Override { token: "BAR_TOKEN".to_string() }
    /// );
    /// assert_eq!(AnnotationKind::classify("Input", Some(no_args)), AnnotationKind::Unrecognized);
    /// ```
    pub fn classify(name: &str, arguments: Option<&[String]>) -> Self {
        match (name, arguments) {
            (OPTIONAL_DECORATOR, Some([])) => Self::Optional,
            (SELF_DECORATOR, Some([])) => Self::SelfOnly,
            (SKIP_SELF_DECORATOR, Some([])) => Self::SkipSelf,
            (HOST_DECORATOR, Some([])) => Self::Host,
            (INJECT_DECORATOR, Some([token, ..])) => Self::Override {
                token: token.clone(),
            },
            _ => Self::Unrecognized,
        }
    }

    /// Resolution option this annotation switches on, if any
    pub fn resolution_option(&self) -> Option<ResolutionOption> {
        match self {
            Self::Optional => Some(ResolutionOption::Optional),
            Self::SelfOnly => Some(ResolutionOption::SelfOnly),
            Self::SkipSelf => Some(ResolutionOption::SkipSelf),
            Self::Host => Some(ResolutionOption::Host),
            Self::Override { .. } | Self::Unrecognized => None,
        }
    }

    /// Override token carried by `@Inject(token)`
    pub fn override_token(&self) -> Option<&str> {
        match self {
            Self::Override { token } => Some(token),
            _ => None,
        }
    }
}

/// One decorator attached to a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationToken {
    /// Source text of the decorator, including `@`
    pub text: String,
    /// Classification of the decorator
    pub kind: AnnotationKind,
}

impl AnnotationToken {
    /// Create a new annotation token
    pub fn new(text: impl Into<String>, kind: AnnotationKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}
