//! The rule trait and its supporting types.

use thiserror::Error;

use crate::context::RuleContext;
use crate::options::{OptionError, OptionSchema, ResolvedOptions};
use crate::report::Severity;

/// A rule title or description: either a fixed string or a function of the
/// rule's resolved configuration.
#[derive(Debug, Clone, Copy)]
pub enum RuleText {
    /// Fixed text.
    Static(&'static str),
    /// Text derived from the resolved options (e.g. to inline a threshold).
    Derived(fn(&ResolvedOptions) -> String),
}

impl RuleText {
    /// Resolves the text against the given options.
    pub fn resolve(&self, options: &ResolvedOptions) -> String {
        match self {
            RuleText::Static(text) => (*text).to_string(),
            RuleText::Derived(f) => f(options),
        }
    }
}

/// Failure of a single rule's check.
///
/// A check failure never aborts the run; the runner records it and moves
/// on. Violations the rule reported before failing are kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// The rule's option lookup or validation failed.
    #[error(transparent)]
    Option(#[from] OptionError),

    /// The check itself failed (bad predicate input, malformed pattern, ...).
    #[error("{0}")]
    Failed(String),
}

impl CheckError {
    /// Creates a check failure with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        CheckError::Failed(message.into())
    }
}

/// A lint rule: identity, presentation, declared options, and the check.
///
/// Checks are synchronous and side-effect through the context's reporter;
/// the runner invokes them strictly sequentially.
pub trait Rule: Send + Sync {
    /// Globally unique rule name, `group/rule-name` form.
    fn name(&self) -> &'static str;

    /// Human-readable title.
    fn title(&self) -> RuleText;

    /// Human-readable description.
    fn description(&self) -> RuleText;

    /// Options this rule accepts. Defaults to none.
    fn options(&self) -> Vec<OptionSchema> {
        Vec::new()
    }

    /// Severity for violations when the config does not override it.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Runs the check against the document, reporting violations through
    /// the context.
    fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_rule_text_resolution() {
        let schemas = vec![OptionSchema::number("minSize").with_default(44.0)];
        let supplied = BTreeMap::new();
        let opts = ResolvedOptions::new(&schemas, &supplied);

        let fixed = RuleText::Static("Fixed title");
        assert_eq!(fixed.resolve(&opts), "Fixed title");

        let derived = RuleText::Derived(|opts| {
            format!("Minimum size is {}", opts.number("minSize").unwrap_or(0.0))
        });
        assert_eq!(derived.resolve(&opts), "Minimum size is 44");

        let supplied: BTreeMap<String, OptionValue> =
            [("minSize".to_string(), OptionValue::Number(32.0))].into();
        let opts = ResolvedOptions::new(&schemas, &supplied);
        assert_eq!(derived.resolve(&opts), "Minimum size is 32");
    }

    #[test]
    fn test_check_error_from_option_error() {
        let err: CheckError = OptionError::Missing("sizes".to_string()).into();
        assert_eq!(err.to_string(), "option 'sizes' has no supplied value and no default");
    }
}
