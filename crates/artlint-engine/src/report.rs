//! Run report types: violations, rule errors, and the aggregate result.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::rule::CheckError;

/// Severity level for violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suggestions, stylistic preferences.
    Info,
    /// Likely problems, worth investigating.
    Warning,
    /// Definitely broken, should fail strict mode.
    Error,
}

/// A single violation reported by a rule against one layer.
///
/// Violations are created only through the rule context's reporter and are
/// never mutated afterwards. The same layer may be reported several times
/// by the same rule; that is intentional and preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the rule that reported the violation.
    pub rule_name: String,
    /// Id of the offending layer.
    pub node_id: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
}

/// A rule-level failure: option validation or the check itself failed.
///
/// One entry per failed rule; the failure never affects other rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleError {
    /// Name of the rule that failed.
    pub rule_name: String,
    /// What went wrong.
    pub error: CheckError,
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rule '{}' failed: {}", self.rule_name, self.error)
    }
}

impl Serialize for RuleError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RuleError", 2)?;
        state.serialize_field("rule_name", &self.rule_name)?;
        state.serialize_field("error", &self.error.to_string())?;
        state.end()
    }
}

/// Per-severity violation counts plus the rule-error count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of error-level violations.
    pub error_count: usize,
    /// Number of warning-level violations.
    pub warning_count: usize,
    /// Number of info-level violations.
    pub info_count: usize,
    /// Number of rules that failed to run.
    pub rule_error_count: usize,
}

/// The aggregate result of one lint run.
///
/// Append-only: no deduplication, no reordering, no capping. `violations`
/// is in emission order; `rule_errors` is in rule-registration order.
/// Partial results are first-class: both lists are returned even when some
/// rules failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    /// Every violation reported, in emission order.
    pub violations: Vec<Violation>,
    /// Every rule-level failure, in rule-registration order.
    pub rule_errors: Vec<RuleError>,
}

impl RunReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no violations were reported and every rule ran cleanly.
    pub fn ok(&self) -> bool {
        self.violations.is_empty() && self.rule_errors.is_empty()
    }

    /// Computes summary counts.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary {
            rule_error_count: self.rule_errors.len(),
            ..RunSummary::default()
        };
        for violation in &self.violations {
            match violation.severity {
                Severity::Info => summary.info_count += 1,
                Severity::Warning => summary.warning_count += 1,
                Severity::Error => summary.error_count += 1,
            }
        }
        summary
    }

    /// Returns the violations reported by one rule, in emission order.
    pub fn violations_for_rule<'a>(&'a self, rule_name: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.rule_name == rule_name)
    }

    /// Returns the rule error for one rule, if it failed.
    pub fn error_for_rule(&self, rule_name: &str) -> Option<&RuleError> {
        self.rule_errors.iter().find(|e| e.rule_name == rule_name)
    }
}
