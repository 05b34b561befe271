//! Rule-set configuration supplied by the caller.
//!
//! Configuration is produced externally (typically loaded from JSON) and
//! resolved once at run start; it is immutable during the run. The JSON
//! shape mirrors the classic assistant config block:
//!
//! ```json
//! {
//!   "rules": {
//!     "artlint/interactive-element-min-size": { "active": true, "minSize": 44 }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::options::OptionValue;
use crate::report::Severity;

/// Per-rule configuration: the `active` flag, optional presentation
/// overrides, and the rule's option values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule runs at all.
    pub active: bool,

    /// Severity override for violations this rule reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Title override shown in rule metadata.
    #[serde(rename = "ruleTitle", skip_serializing_if = "Option::is_none")]
    pub rule_title: Option<String>,

    /// Option values, keyed by the names the rule declares.
    #[serde(flatten)]
    pub options: BTreeMap<String, OptionValue>,
}

impl RuleConfig {
    /// Creates an active config with no options set.
    pub fn enabled() -> Self {
        Self {
            active: true,
            severity: None,
            rule_title: None,
            options: BTreeMap::new(),
        }
    }

    /// Creates an inactive config.
    pub fn disabled() -> Self {
        Self {
            active: false,
            ..Self::enabled()
        }
    }

    /// Builder method to set an option value.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Builder method to override the violation severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Builder method to override the rule title.
    pub fn with_rule_title(mut self, title: impl Into<String>) -> Self {
        self.rule_title = Some(title.into());
        self
    }
}

/// Configuration for a whole run: rule name → [`RuleConfig`].
///
/// Rules without an entry are skipped, exactly like rules configured with
/// `active: false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// Per-rule configuration, keyed by rule name.
    pub rules: BTreeMap<String, RuleConfig>,
}

impl RuleSetConfig {
    /// Creates an empty configuration (every rule skipped).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a rule entry.
    pub fn with_rule(mut self, name: impl Into<String>, config: RuleConfig) -> Self {
        self.rules.insert(name.into(), config);
        self
    }

    /// Returns the configuration for a rule, if present.
    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
