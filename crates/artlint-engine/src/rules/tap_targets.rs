//! Tap-target sizing rules.
//!
//! Small tap areas cause frustration for people using an app; the iOS
//! Human Interface Guidelines recommend at least 44×44 points.

use regex::Regex;

use crate::context::RuleContext;
use crate::options::OptionSchema;
use crate::rule::{CheckError, Rule, RuleText};

/// Interactive (flow-enabled) layers must meet a minimum size in both
/// dimensions.
pub struct InteractiveElementMinSize;

impl Rule for InteractiveElementMinSize {
    fn name(&self) -> &'static str {
        "artlint/interactive-element-min-size"
    }

    fn title(&self) -> RuleText {
        RuleText::Derived(|opts| {
            format!(
                "Interactive elements should have a minimum size of {0}×{0}",
                opts.number("minSize").unwrap_or(0.0)
            )
        })
    }

    fn description(&self) -> RuleText {
        RuleText::Static("Small tap areas can cause frustration for people using your app")
    }

    fn options(&self) -> Vec<OptionSchema> {
        vec![OptionSchema::number("minSize")
            .with_description(
                "An interactive element's width and height must both be at least the minimum size",
            )
            .with_minimum(1.0)]
    }

    fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError> {
        let min_size = ctx.options().number("minSize")?;

        for element in ctx.any_layer() {
            if !element.flow {
                continue;
            }
            let width = element.frame.width;
            let height = element.frame.height;
            if width >= min_size && height >= min_size {
                continue;
            }

            ctx.report(
                format!(
                    "Interactive element has a size of {}×{} (minimum should be {2}×{2})",
                    width, height, min_size
                ),
                element,
            );
        }
        Ok(())
    }
}

/// Symbol instances whose name matches a pattern (buttons, icons, links)
/// must meet a minimum size in both dimensions.
pub struct SymbolsMinSize;

impl Rule for SymbolsMinSize {
    fn name(&self) -> &'static str {
        "artlint/symbols-min-size"
    }

    fn title(&self) -> RuleText {
        RuleText::Derived(|opts| {
            format!(
                "Symbol instances should have a minimum size of {0}×{0}",
                opts.number("minSize").unwrap_or(0.0)
            )
        })
    }

    fn description(&self) -> RuleText {
        RuleText::Static("Small tap areas can cause frustration for people using your app")
    }

    fn options(&self) -> Vec<OptionSchema> {
        vec![
            OptionSchema::number("minSize")
                .with_description(
                    "A tappable area's width and height must both be at least the minimum size",
                )
                .with_minimum(1.0),
            OptionSchema::string("namePattern")
                .with_description("Name pattern to match symbol instance layers"),
        ]
    }

    fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError> {
        let min_size = ctx.options().number("minSize")?;
        let pattern = ctx.options().string("namePattern")?;
        let matcher = Regex::new(pattern)
            .map_err(|e| CheckError::failed(format!("invalid name pattern '{}': {}", pattern, e)))?;

        for instance in ctx.symbol_instances() {
            if !matcher.is_match(&instance.name.to_lowercase()) {
                continue;
            }
            let width = instance.frame.width;
            let height = instance.frame.height;
            if width >= min_size && height >= min_size {
                continue;
            }

            ctx.report(
                format!(
                    "Symbol instance has a size of {}×{} (minimum should be {2}×{2})",
                    width, height, min_size
                ),
                instance,
            );
        }
        Ok(())
    }
}
