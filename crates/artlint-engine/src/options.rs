//! Option schemas, values, and resolution.
//!
//! Every rule declares the options it accepts as a list of [`OptionSchema`]
//! entries. Supplied configuration is validated against the declared schema
//! before a rule runs ([`validate_options`]); inside the check, the rule
//! reads values through the typed getters of [`ResolvedOptions`], which
//! merge caller overrides over declared defaults.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The declared type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionKind {
    Bool,
    Number,
    String,
    StringArray,
}

impl OptionKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Bool => "bool",
            OptionKind::Number => "number",
            OptionKind::String => "string",
            OptionKind::StringArray => "string-array",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configuration value supplied for a rule option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    String(String),
    StringArray(Vec<String>),
}

impl OptionValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Bool(_) => OptionKind::Bool,
            OptionValue::Number(_) => OptionKind::Number,
            OptionValue::String(_) => OptionKind::String,
            OptionValue::StringArray(_) => OptionKind::StringArray,
        }
    }

    /// Builds a string-array value from anything iterable over strings.
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionValue::StringArray(values.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Number(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(v: Vec<String>) -> Self {
        OptionValue::StringArray(v)
    }
}

/// Declaration of a single rule option: name, type, constraints, default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSchema {
    /// Option name as it appears in configuration.
    pub name: String,
    /// Declared value type.
    pub kind: OptionKind,
    /// Human-readable description.
    pub description: String,
    /// Value used when the caller supplies none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<OptionValue>,
    /// Lower bound for number options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Minimum element count for string-array options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
}

impl OptionSchema {
    fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: String::new(),
            default: None,
            minimum: None,
            min_length: None,
        }
    }

    /// Declares a bool option.
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::Bool)
    }

    /// Declares a number option.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::Number)
    }

    /// Declares a string option.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::String)
    }

    /// Declares a string-array option.
    pub fn string_array(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::StringArray)
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the default value.
    pub fn with_default(mut self, default: impl Into<OptionValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Builder method to set the minimum for a number option.
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Builder method to set the minimum length for a string-array option.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }
}

/// Errors raised while resolving or validating rule options.
///
/// These are always per-rule: the runner converts them into a
/// [`RuleError`](crate::report::RuleError) and moves on to the next rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionError {
    /// The rule requested an option absent from its own declared schema.
    #[error("option '{0}' is not declared by this rule")]
    NotDeclared(String),

    /// A declared option has neither a supplied value nor a default.
    #[error("option '{0}' has no supplied value and no default")]
    Missing(String),

    /// The value's type does not match the declaration or the requested type.
    #[error("option '{name}' expected a {expected} value, got {actual}")]
    WrongType {
        name: String,
        expected: OptionKind,
        actual: OptionKind,
    },

    /// A supplied value violates a declared constraint.
    #[error("option '{name}' {reason}")]
    Constraint { name: String, reason: String },
}

/// Validates supplied option values against a rule's declared schema.
///
/// Checks declared type, `minimum` for numbers, and `min_length` for string
/// arrays. Values the schema does not declare are ignored; missing required
/// values are not an error here (they surface as [`OptionError::Missing`]
/// when the check asks for them).
pub fn validate_options(
    schemas: &[OptionSchema],
    supplied: &BTreeMap<String, OptionValue>,
) -> Result<(), OptionError> {
    for schema in schemas {
        let Some(value) = supplied.get(&schema.name) else {
            continue;
        };
        if value.kind() != schema.kind {
            return Err(OptionError::WrongType {
                name: schema.name.clone(),
                expected: schema.kind,
                actual: value.kind(),
            });
        }
        match value {
            OptionValue::Number(n) => {
                if let Some(min) = schema.minimum {
                    if *n < min {
                        return Err(OptionError::Constraint {
                            name: schema.name.clone(),
                            reason: format!("must be at least {}, got {}", min, n),
                        });
                    }
                }
            }
            OptionValue::StringArray(items) => {
                if let Some(min_len) = schema.min_length {
                    if items.len() < min_len {
                        return Err(OptionError::Constraint {
                            name: schema.name.clone(),
                            reason: format!(
                                "must have at least {} entr{}, got {}",
                                min_len,
                                if min_len == 1 { "y" } else { "ies" },
                                items.len()
                            ),
                        });
                    }
                }
            }
            OptionValue::Bool(_) | OptionValue::String(_) => {}
        }
    }
    Ok(())
}

/// Read view over a rule's resolved options: supplied values merged over
/// declared defaults, gated by the declared schema.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedOptions<'a> {
    schemas: &'a [OptionSchema],
    supplied: &'a BTreeMap<String, OptionValue>,
}

impl<'a> ResolvedOptions<'a> {
    pub(crate) fn new(schemas: &'a [OptionSchema], supplied: &'a BTreeMap<String, OptionValue>) -> Self {
        Self { schemas, supplied }
    }

    fn lookup(&self, name: &str) -> Result<&'a OptionValue, OptionError> {
        let schema = self
            .schemas
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| OptionError::NotDeclared(name.to_string()))?;
        self.supplied
            .get(name)
            .or(schema.default.as_ref())
            .ok_or_else(|| OptionError::Missing(name.to_string()))
    }

    fn wrong_type(name: &str, expected: OptionKind, value: &OptionValue) -> OptionError {
        OptionError::WrongType {
            name: name.to_string(),
            expected,
            actual: value.kind(),
        }
    }

    /// Returns a bool option.
    pub fn bool(&self, name: &str) -> Result<bool, OptionError> {
        match self.lookup(name)? {
            OptionValue::Bool(v) => Ok(*v),
            other => Err(Self::wrong_type(name, OptionKind::Bool, other)),
        }
    }

    /// Returns a number option.
    pub fn number(&self, name: &str) -> Result<f64, OptionError> {
        match self.lookup(name)? {
            OptionValue::Number(v) => Ok(*v),
            other => Err(Self::wrong_type(name, OptionKind::Number, other)),
        }
    }

    /// Returns a string option.
    pub fn string(&self, name: &str) -> Result<&'a str, OptionError> {
        match self.lookup(name)? {
            OptionValue::String(v) => Ok(v),
            other => Err(Self::wrong_type(name, OptionKind::String, other)),
        }
    }

    /// Returns a string-array option.
    pub fn string_array(&self, name: &str) -> Result<&'a [String], OptionError> {
        match self.lookup(name)? {
            OptionValue::StringArray(v) => Ok(v),
            other => Err(Self::wrong_type(name, OptionKind::StringArray, other)),
        }
    }
}
