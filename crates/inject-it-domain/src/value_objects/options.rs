//! Resolution options passed to the accessor call

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named flag altering how the accessor locates its dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionOption {
    /// Resolve to `null` instead of failing when nothing is provided
    Optional,
    /// Only look at the requesting injector
    SelfOnly,
    /// Start at the parent of the requesting injector
    SkipSelf,
    /// Stop at the host element boundary
    Host,
}

impl ResolutionOption {
    /// Key used in the options literal
    pub const fn key(self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::SelfOnly => "self",
            Self::SkipSelf => "skipSelf",
            Self::Host => "host",
        }
    }

    /// Reverse of [`ResolutionOption::key`]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "optional" => Some(Self::Optional),
            "self" => Some(Self::SelfOnly),
            "skipSelf" => Some(Self::SkipSelf),
            "host" => Some(Self::Host),
            _ => None,
        }
    }
}

impl fmt::Display for ResolutionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A value in an object literal, rendered in its literal form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
    /// `true` / `false`
    Bool(bool),
    /// Bare numeric literal
    Number(f64),
    /// Single-quoted string literal
    Str(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "'{}'", value.replace('\\', "\\\\").replace('\'', "\\'")),
        }
    }
}

/// Ordered set of enabled resolution options
///
/// Only enabled options are stored; absence means "not set". Order is the
/// order in which each option was first enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsRecord {
    enabled: Vec<ResolutionOption>,
}

impl OptionsRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable an option. Enabling it again keeps its original position.
    pub fn enable(&mut self, option: ResolutionOption) {
        if !self.enabled.contains(&option) {
            self.enabled.push(option);
        }
    }

    /// Whether an option is enabled
    pub fn contains(&self, option: ResolutionOption) -> bool {
        self.enabled.contains(&option)
    }

    /// True when no option is enabled
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Number of enabled options
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Enabled options in insertion order
    pub fn options(&self) -> &[ResolutionOption] {
        &self.enabled
    }

    /// Key/value entries in insertion order; every value is `true`
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, OptionValue)> + '_ {
        self.enabled
            .iter()
            .map(|option| (option.key(), OptionValue::Bool(true)))
    }
}

impl FromIterator<ResolutionOption> for OptionsRecord {
    fn from_iter<I: IntoIterator<Item = ResolutionOption>>(iter: I) -> Self {
        let mut record = Self::new();
        for option in iter {
            record.enable(option);
        }
        record
    }
}
