//! Text content rules.

use crate::context::RuleContext;
use crate::rule::{CheckError, Rule, RuleText};

/// Text truncated with an ellipsis hides content; flag it so the design
/// can offer a detail view instead.
pub struct IncludesEllipsis;

/// Spellings that all render as a truncation ellipsis.
const ELLIPSIS_FORMS: [&str; 3] = ["…", ". . .", "..."];

impl Rule for IncludesEllipsis {
    fn name(&self) -> &'static str {
        "artlint/includes-ellipsis"
    }

    fn title(&self) -> RuleText {
        RuleText::Static("Possible incorrect use of ellipsis (…)")
    }

    fn description(&self) -> RuleText {
        RuleText::Static("Reports a violation when a text layer might be using ellipsis incorrectly")
    }

    fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError> {
        for layer in ctx.text_layers() {
            let Some(attrs) = layer.text_attributes() else {
                continue;
            };
            if ELLIPSIS_FORMS.iter().any(|form| attrs.content.contains(form)) {
                ctx.report(
                    "Text layer is using ellipsis (…). Make sure users can access a detail view to see the rest of the content",
                    layer,
                );
            }
        }
        Ok(())
    }
}
