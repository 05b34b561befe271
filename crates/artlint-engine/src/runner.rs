//! Rule registry and runner: the engine's core loop.

use std::collections::BTreeMap;

use artlint_document::Document;
use serde::{Deserialize, Serialize};

use crate::config::RuleSetConfig;
use crate::context::RuleContext;
use crate::error::EngineError;
use crate::index::ObjectIndex;
use crate::options::{validate_options, OptionSchema, ResolvedOptions};
use crate::report::{RuleError, RunReport, Severity};
use crate::rule::Rule;
use crate::rules;

/// Registry of lint rules, in registration order.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates a registry with all built-in rules registered.
    pub fn default_rules() -> Self {
        let mut registry = Self::new();
        for rule in rules::all_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Registers a rule. Rules run in registration order.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Returns all registered rules.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns rule metadata resolved against the given configuration.
    ///
    /// Derived titles and descriptions are evaluated with the rule's
    /// resolved options; `ruleTitle` and `severity` config overrides are
    /// honored.
    pub fn metadata(&self, config: &RuleSetConfig) -> Vec<RuleMetadata> {
        let no_options = BTreeMap::new();
        self.rules
            .iter()
            .map(|rule| {
                let rule_config = config.rule(rule.name());
                let supplied = rule_config.map_or(&no_options, |c| &c.options);
                let schemas = rule.options();
                let resolved = ResolvedOptions::new(&schemas, supplied);
                RuleMetadata {
                    name: rule.name().to_string(),
                    title: rule_config
                        .and_then(|c| c.rule_title.clone())
                        .unwrap_or_else(|| rule.title().resolve(&resolved)),
                    description: rule.description().resolve(&resolved),
                    severity: rule_config
                        .and_then(|c| c.severity)
                        .unwrap_or_else(|| rule.default_severity()),
                    active: rule_config.is_some_and(|c| c.active),
                    options: schemas,
                }
            })
            .collect()
    }

    /// Runs every active rule against the document.
    ///
    /// The object index is built once and shared read-only by all rules.
    /// Rules execute strictly sequentially, in registration order:
    ///
    /// 1. skipped if unconfigured or `active: false`;
    /// 2. supplied options are validated against the declared schema — a
    ///    failure records a [`RuleError`] and skips the invocation;
    /// 3. the check runs with a fresh [`RuleContext`]; an `Err` becomes a
    ///    [`RuleError`] while violations reported before the failure stay
    ///    in the result.
    ///
    /// A failure in one rule never suppresses violations from another; the
    /// only fatal error is a malformed document.
    pub fn run(&self, document: &Document, config: &RuleSetConfig) -> Result<RunReport, EngineError> {
        let index = ObjectIndex::build(document)?;
        let mut report = RunReport::new();

        for rule in &self.rules {
            let Some(rule_config) = config.rule(rule.name()) else {
                continue;
            };
            if !rule_config.active {
                continue;
            }

            let schemas = rule.options();
            if let Err(err) = validate_options(&schemas, &rule_config.options) {
                report.rule_errors.push(RuleError {
                    rule_name: rule.name().to_string(),
                    error: err.into(),
                });
                continue;
            }

            let severity = rule_config
                .severity
                .unwrap_or_else(|| rule.default_severity());
            let options = ResolvedOptions::new(&schemas, &rule_config.options);
            let mut ctx = RuleContext::new(
                rule.name(),
                severity,
                &index,
                options,
                &mut report.violations,
            );
            if let Err(err) = rule.check(&mut ctx) {
                report.rule_errors.push(RuleError {
                    rule_name: rule.name().to_string(),
                    error: err,
                });
            }
        }

        Ok(report)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// Metadata about a rule for documentation/introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    /// Rule name.
    pub name: String,
    /// Resolved title (config `ruleTitle` override wins).
    pub title: String,
    /// Resolved description.
    pub description: String,
    /// Effective severity for this configuration.
    pub severity: Severity,
    /// Whether the configuration activates the rule.
    pub active: bool,
    /// Declared option schemas.
    pub options: Vec<OptionSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::rule::{CheckError, RuleText};
    use artlint_document::{Frame, Layer};
    use pretty_assertions::assert_eq;

    /// Reports one violation per layer, then optionally fails.
    struct CountingRule {
        name: &'static str,
        fail_after_reporting: bool,
    }

    impl Rule for CountingRule {
        fn name(&self) -> &'static str {
            self.name
        }
        fn title(&self) -> RuleText {
            RuleText::Static("Counting rule")
        }
        fn description(&self) -> RuleText {
            RuleText::Static("Reports every layer")
        }
        fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError> {
            for layer in ctx.any_layer() {
                ctx.report("seen", layer);
            }
            if self.fail_after_reporting {
                return Err(CheckError::failed("boom"));
            }
            Ok(())
        }
    }

    /// Fails before reporting anything.
    struct AlwaysFailingRule;

    impl Rule for AlwaysFailingRule {
        fn name(&self) -> &'static str {
            "test/always-failing"
        }
        fn title(&self) -> RuleText {
            RuleText::Static("Always failing")
        }
        fn description(&self) -> RuleText {
            RuleText::Static("Fails unconditionally")
        }
        fn check(&self, _ctx: &mut RuleContext) -> Result<(), CheckError> {
            Err(CheckError::failed("unconditional failure"))
        }
    }

    fn two_layer_document() -> Document {
        Document::new(vec![
            Layer::shape("s1", "A", Frame::sized(10.0, 10.0)),
            Layer::shape("s2", "B", Frame::sized(10.0, 10.0)),
        ])
    }

    fn activate(names: &[&str]) -> RuleSetConfig {
        let mut config = RuleSetConfig::new();
        for name in names {
            config = config.with_rule(*name, RuleConfig::enabled());
        }
        config
    }

    #[test]
    fn test_failure_does_not_cross_rule_boundaries() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(AlwaysFailingRule));
        registry.register(Box::new(CountingRule {
            name: "test/counting",
            fail_after_reporting: false,
        }));

        let report = registry
            .run(
                &two_layer_document(),
                &activate(&["test/always-failing", "test/counting"]),
            )
            .unwrap();

        assert_eq!(report.violations.len(), 2);
        assert!(report.violations.iter().all(|v| v.rule_name == "test/counting"));
        assert_eq!(report.rule_errors.len(), 1);
        assert_eq!(report.rule_errors[0].rule_name, "test/always-failing");
    }

    #[test]
    fn test_partial_violations_survive_a_late_failure() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(CountingRule {
            name: "test/counting",
            fail_after_reporting: true,
        }));

        let report = registry
            .run(&two_layer_document(), &activate(&["test/counting"]))
            .unwrap();

        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.rule_errors.len(), 1);
        assert_eq!(report.rule_errors[0].error, CheckError::failed("boom"));
    }

    #[test]
    fn test_inactive_rule_contributes_nothing() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(AlwaysFailingRule));

        let config =
            RuleSetConfig::new().with_rule("test/always-failing", RuleConfig::disabled());
        let report = registry.run(&two_layer_document(), &config).unwrap();
        assert!(report.ok());

        // Unconfigured behaves the same as inactive.
        let report = registry
            .run(&two_layer_document(), &RuleSetConfig::new())
            .unwrap();
        assert!(report.ok());
    }

    #[test]
    fn test_severity_override_applies_to_reports() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(CountingRule {
            name: "test/counting",
            fail_after_reporting: false,
        }));

        let config = RuleSetConfig::new()
            .with_rule("test/counting", RuleConfig::enabled().with_severity(Severity::Info));
        let report = registry.run(&two_layer_document(), &config).unwrap();
        assert!(report.violations.iter().all(|v| v.severity == Severity::Info));
    }

    #[test]
    fn test_malformed_document_aborts_before_rules() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(CountingRule {
            name: "test/counting",
            fail_after_reporting: false,
        }));

        let doc = Document::new(vec![
            Layer::shape("dup", "A", Frame::sized(1.0, 1.0)),
            Layer::shape("dup", "B", Frame::sized(1.0, 1.0)),
        ]);
        let err = registry.run(&doc, &activate(&["test/counting"])).unwrap_err();
        assert!(matches!(err, EngineError::DocumentMalformed { .. }));
    }

    #[test]
    fn test_run_is_deterministic() {
        let registry = RuleRegistry::default_rules();
        let config = rules::recommended_config();
        let doc = Document::new(vec![Layer::artboard(
            "a1",
            "Odd Screen",
            Frame::sized(123.0, 456.0),
        )
        .with_child(
            Layer::text("t1", "Label", Frame::sized(100.0, 20.0), "Loading...")
                .with_font("SFProDisplay-Thin", 12.0),
        )]);

        let first = registry.run(&doc, &config).unwrap();
        let second = registry.run(&doc, &config).unwrap();
        assert_eq!(first, second);
        assert!(!first.violations.is_empty());
    }

    #[test]
    fn test_metadata_resolves_overrides() {
        let registry = RuleRegistry::default_rules();
        let config = rules::recommended_config();
        let metadata = registry.metadata(&config);
        assert_eq!(metadata.len(), registry.len());

        let artboards = metadata
            .iter()
            .find(|m| m.name == "artlint/artboards-allowed-sizes")
            .unwrap();
        // recommended_config overrides the title.
        assert_eq!(
            artboards.title,
            "Artboards should match any iPhone or iPad display or be taller"
        );
        assert!(artboards.active);

        let min_size = metadata
            .iter()
            .find(|m| m.name == "artlint/interactive-element-min-size")
            .unwrap();
        assert_eq!(
            min_size.title,
            "Interactive elements should have a minimum size of 44×44"
        );
    }
}
