//! Per-invocation rule context.
//!
//! A context is built fresh for exactly one rule invocation and dropped
//! when that invocation settles, so violations can never be attributed to
//! the wrong rule. It exposes the three capabilities a check needs: the
//! shared object index, the rule's resolved options, and the reporter.

use artlint_document::Layer;

use crate::index::{ObjectClass, ObjectIndex};
use crate::options::ResolvedOptions;
use crate::report::{Severity, Violation};

/// Facade handed to a rule's check function.
pub struct RuleContext<'run, 'doc> {
    rule_name: &'static str,
    severity: Severity,
    index: &'run ObjectIndex<'doc>,
    options: ResolvedOptions<'run>,
    violations: &'run mut Vec<Violation>,
}

impl<'run, 'doc> RuleContext<'run, 'doc> {
    pub(crate) fn new(
        rule_name: &'static str,
        severity: Severity,
        index: &'run ObjectIndex<'doc>,
        options: ResolvedOptions<'run>,
        violations: &'run mut Vec<Violation>,
    ) -> Self {
        Self {
            rule_name,
            severity,
            index,
            options,
            violations,
        }
    }

    /// Name of the rule this context is bound to.
    pub fn rule_name(&self) -> &'static str {
        self.rule_name
    }

    /// The rule's resolved options.
    pub fn options(&self) -> &ResolvedOptions<'run> {
        &self.options
    }

    /// Layers of the given kind, in document order. Empty if none exist.
    ///
    /// The returned slice borrows the shared index, not the context, so a
    /// rule can iterate it while reporting.
    pub fn objects(&self, class: ObjectClass) -> &'run [&'doc Layer] {
        self.index.objects(class)
    }

    /// All artboards.
    pub fn artboards(&self) -> &'run [&'doc Layer] {
        self.index.artboards()
    }

    /// All text layers.
    pub fn text_layers(&self) -> &'run [&'doc Layer] {
        self.index.text_layers()
    }

    /// All symbol instances.
    pub fn symbol_instances(&self) -> &'run [&'doc Layer] {
        self.index.symbol_instances()
    }

    /// Every layer, regardless of kind.
    pub fn any_layer(&self) -> &'run [&'doc Layer] {
        self.index.any_layer()
    }

    /// Reports a violation against `layer` at the rule's default severity
    /// (or the configured override).
    ///
    /// Reporting the same layer several times produces that many
    /// independent violations; nothing is deduplicated.
    pub fn report(&mut self, message: impl Into<String>, layer: &Layer) {
        let severity = self.severity;
        self.report_with_severity(message, layer, severity);
    }

    /// Reports a violation with an explicit severity.
    pub fn report_with_severity(&mut self, message: impl Into<String>, layer: &Layer, severity: Severity) {
        self.violations.push(Violation {
            rule_name: self.rule_name.to_string(),
            node_id: layer.id.clone(),
            message: message.into(),
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artlint_document::{Document, Frame};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_report_attributes_to_bound_rule() {
        let doc = Document::new(vec![Layer::shape("s1", "S", Frame::sized(10.0, 10.0))]);
        let index = ObjectIndex::build(&doc).unwrap();
        let schemas = Vec::new();
        let supplied = BTreeMap::new();
        let mut violations = Vec::new();

        let mut ctx = RuleContext::new(
            "test/rule",
            Severity::Warning,
            &index,
            ResolvedOptions::new(&schemas, &supplied),
            &mut violations,
        );

        let layer = ctx.any_layer()[0];
        ctx.report("first", layer);
        ctx.report("second", layer);
        ctx.report_with_severity("third", layer, Severity::Info);

        assert_eq!(violations.len(), 3);
        assert!(violations.iter().all(|v| v.rule_name == "test/rule"));
        assert!(violations.iter().all(|v| v.node_id == "s1"));
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[2].severity, Severity::Info);
    }

    #[test]
    fn test_objects_of_absent_kind_is_empty() {
        let doc = Document::empty();
        let index = ObjectIndex::build(&doc).unwrap();
        let schemas = Vec::new();
        let supplied = BTreeMap::new();
        let mut violations = Vec::new();

        let ctx = RuleContext::new(
            "test/rule",
            Severity::Error,
            &index,
            ResolvedOptions::new(&schemas, &supplied),
            &mut violations,
        );
        assert!(ctx.objects(ObjectClass::Artboard).is_empty());
        assert!(ctx.text_layers().is_empty());
    }
}
