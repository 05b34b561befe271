//! Font usage rules for the Apple system families.

use artlint_document::TextAttributes;

use crate::context::RuleContext;
use crate::options::OptionSchema;
use crate::rule::{CheckError, Rule, RuleText};

fn font_name(attrs: &TextAttributes) -> &str {
    attrs.font_name.as_deref().unwrap_or("")
}

fn font_size(attrs: &TextAttributes) -> f64 {
    attrs.font_size.unwrap_or(0.0)
}

/// Family segment of a PostScript font name ("SFProText-Regular" → "SFProText").
fn family_of(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}

/// Text layers may only use an allowed set of font weights.
pub struct FontWeightsAllowed;

impl Rule for FontWeightsAllowed {
    fn name(&self) -> &'static str {
        "artlint/font-weights-allowed"
    }

    fn title(&self) -> RuleText {
        RuleText::Static("Incorrect use of font weights")
    }

    fn description(&self) -> RuleText {
        RuleText::Derived(|opts| {
            format!(
                "Reports a violation when a text layer uses a weight outside \u{201c}{}\u{201d}",
                opts.string_array("pattern")
                    .map(|weights| weights.join(", "))
                    .unwrap_or_default()
            )
        })
    }

    fn options(&self) -> Vec<OptionSchema> {
        vec![OptionSchema::string_array("pattern")
            .with_description("Font weight suffixes that text layers are allowed to use")
            .with_min_length(1)]
    }

    fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError> {
        let allowed = ctx.options().string_array("pattern")?;

        for layer in ctx.text_layers() {
            let Some(attrs) = layer.text_attributes() else {
                continue;
            };
            // Weight is the segment after the first '-' in the PostScript
            // name; a missing or weightless font name counts as disallowed.
            let weight = font_name(attrs).split('-').nth(1).unwrap_or("");
            if allowed.iter().any(|w| w == weight) {
                continue;
            }

            ctx.report(
                format!(
                    "Text layer is using \u{201c}{}\u{201d}. The only allowed weights are \u{201c}{}\u{201d}",
                    weight,
                    allowed.join(", ")
                ),
                layer,
            );
        }
        Ok(())
    }
}

/// San Francisco comes in two faces: "Text" for sizes below 20 points and
/// "Display" for 20 points and up.
pub struct SanFranciscoTextDisplay;

impl Rule for SanFranciscoTextDisplay {
    fn name(&self) -> &'static str {
        "artlint/sf-text-display"
    }

    fn title(&self) -> RuleText {
        RuleText::Derived(|opts| {
            format!(
                "Incorrect use of {} font",
                opts.string("pattern").unwrap_or("San Francisco")
            )
        })
    }

    fn description(&self) -> RuleText {
        RuleText::Derived(|opts| {
            format!(
                "Reports a violation when text layers contain an incorrect use of the {} font",
                opts.string("pattern").unwrap_or("San Francisco")
            )
        })
    }

    fn options(&self) -> Vec<OptionSchema> {
        vec![OptionSchema::string("pattern")
            .with_description("Display name of the font family, used in violation messages")]
    }

    fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError> {
        let family = ctx.options().string("pattern")?;

        for layer in ctx.text_layers() {
            let Some(attrs) = layer.text_attributes() else {
                continue;
            };
            let name = font_name(attrs);
            if !name.contains("SF") {
                continue;
            }
            let size = font_size(attrs);

            if size < 20.0 && !name.contains("Text") {
                ctx.report(
                    format!(
                        "Text layers using \u{201c}{}\u{201d} should use the \u{201c}Text\u{201d} face at size {} (smaller than 20 points). Currently using \u{201c}{}\u{201d}",
                        family,
                        size,
                        family_of(name)
                    ),
                    layer,
                );
            }
            if size >= 20.0 && !name.contains("Display") {
                ctx.report(
                    format!(
                        "Text layers using \u{201c}{}\u{201d} should use the \u{201c}Display\u{201d} face at size {} (20 points or larger). Currently using \u{201c}{}\u{201d}",
                        family,
                        size,
                        family_of(name)
                    ),
                    layer,
                );
            }
        }
        Ok(())
    }
}

/// New York must use the optical size matching the point size: Small below
/// 20, Medium between 20 and 35, Large between 36 and 53, Extra Large from
/// 54 up.
pub struct NewYorkOpticalSize;

impl Rule for NewYorkOpticalSize {
    fn name(&self) -> &'static str {
        "artlint/ny-optical-size"
    }

    fn title(&self) -> RuleText {
        RuleText::Derived(|opts| {
            format!(
                "Incorrect use of {} font",
                opts.string("pattern").unwrap_or("New York")
            )
        })
    }

    fn description(&self) -> RuleText {
        RuleText::Derived(|opts| {
            format!(
                "Reports a violation when text layers contain an incorrect use of the {} font",
                opts.string("pattern").unwrap_or("New York")
            )
        })
    }

    fn options(&self) -> Vec<OptionSchema> {
        vec![OptionSchema::string("pattern")
            .with_description("Display name of the font family, used in violation messages")]
    }

    fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError> {
        let family = ctx.options().string("pattern")?;

        for layer in ctx.text_layers() {
            let Some(attrs) = layer.text_attributes() else {
                continue;
            };
            let name = font_name(attrs);
            if !name.contains("NewYork") {
                continue;
            }
            let size = font_size(attrs);

            if size < 20.0 && !name.contains("Small") {
                ctx.report(
                    format!(
                        "Text layers using \u{201c}{}\u{201d} should use the \u{201c}Small\u{201d} optical size at size {} (smaller than 20 points). Currently using \u{201c}{}\u{201d}",
                        family,
                        size,
                        family_of(name)
                    ),
                    layer,
                );
            }
            // macOS reports the Medium optical size as "Regular".
            if (20.0..=35.0).contains(&size) && !name.contains("Regular") {
                ctx.report(
                    format!(
                        "Text layers using \u{201c}{}\u{201d} should use the \u{201c}Medium\u{201d} optical size at size {} (between 20 and 35 points). Currently using \u{201c}{}\u{201d}",
                        family,
                        size,
                        family_of(name)
                    ),
                    layer,
                );
            }
            if (36.0..=53.0).contains(&size) && !name.contains("Large") {
                ctx.report(
                    format!(
                        "Text layers using \u{201c}{}\u{201d} should use the \u{201c}Large\u{201d} optical size at size {} (between 36 and 53 points). Currently using \u{201c}{}\u{201d}",
                        family,
                        size,
                        family_of(name)
                    ),
                    layer,
                );
            }
            if size >= 54.0 && !name.contains("ExtraLarge") {
                ctx.report(
                    format!(
                        "Text layers using \u{201c}{}\u{201d} should use the \u{201c}Extra Large\u{201d} optical size at size {} (54 points or larger). Currently using \u{201c}{}\u{201d}",
                        family,
                        size,
                        family_of(name)
                    ),
                    layer,
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::options::OptionValue;
    use crate::rules::testutil::run_rule;
    use artlint_document::{Document, Frame, Layer};
    use pretty_assertions::assert_eq;

    fn text_with_font(font: &str, size: f64) -> Document {
        Document::new(vec![
            Layer::text("t1", "Label", Frame::sized(200.0, 40.0), "Hello").with_font(font, size)
        ])
    }

    fn weights_config(weights: &[&str]) -> RuleConfig {
        RuleConfig::enabled().with_option("pattern", OptionValue::strings(weights.iter().copied()))
    }

    fn family_config(family: &str) -> RuleConfig {
        RuleConfig::enabled().with_option("pattern", family)
    }

    #[test]
    fn test_allowed_weight_passes() {
        let report = run_rule(
            Box::new(FontWeightsAllowed),
            weights_config(&["Regular", "Medium", "Semibold", "Bold"]),
            &text_with_font("SFProText-Regular", 17.0),
        );
        assert!(report.ok());
    }

    #[test]
    fn test_disallowed_weight_is_reported() {
        let report = run_rule(
            Box::new(FontWeightsAllowed),
            weights_config(&["Regular", "Medium", "Semibold", "Bold"]),
            &text_with_font("SFProText-Thin", 17.0),
        );
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations[0].message,
            "Text layer is using \u{201c}Thin\u{201d}. The only allowed weights are \u{201c}Regular, Medium, Semibold, Bold\u{201d}"
        );
    }

    #[test]
    fn test_missing_font_name_is_reported_as_disallowed() {
        let doc = Document::new(vec![Layer::text("t1", "Label", Frame::sized(200.0, 40.0), "Hi")]);
        let report = run_rule(Box::new(FontWeightsAllowed), weights_config(&["Regular"]), &doc);
        assert_eq!(report.violations.len(), 1);
    }

    #[test]
    fn test_sf_text_face_below_20_passes() {
        let report = run_rule(
            Box::new(SanFranciscoTextDisplay),
            family_config("San Francisco"),
            &text_with_font("SFProText-Regular", 17.0),
        );
        assert!(report.ok());
    }

    #[test]
    fn test_sf_display_face_below_20_is_reported() {
        let report = run_rule(
            Box::new(SanFranciscoTextDisplay),
            family_config("San Francisco"),
            &text_with_font("SFProDisplay-Regular", 17.0),
        );
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("\u{201c}Text\u{201d} face at size 17"));
    }

    #[test]
    fn test_sf_text_face_at_20_or_larger_is_reported() {
        let report = run_rule(
            Box::new(SanFranciscoTextDisplay),
            family_config("San Francisco"),
            &text_with_font("SFProText-Regular", 20.0),
        );
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("\u{201c}Display\u{201d} face at size 20"));
    }

    #[test]
    fn test_non_sf_fonts_are_ignored() {
        let report = run_rule(
            Box::new(SanFranciscoTextDisplay),
            family_config("San Francisco"),
            &text_with_font("Helvetica-Bold", 17.0),
        );
        assert!(report.ok());
    }

    #[test]
    fn test_ny_small_below_20_passes() {
        let report = run_rule(
            Box::new(NewYorkOpticalSize),
            family_config("New York"),
            &text_with_font("NewYorkSmall-Regular", 17.0),
        );
        assert!(report.ok());
    }

    #[test]
    fn test_ny_wrong_optical_size_between_20_and_35_is_reported() {
        // macOS reports Medium as Regular, so "NewYorkLarge-Bold" at 24 is
        // wrong while anything containing "Regular" passes.
        let report = run_rule(
            Box::new(NewYorkOpticalSize),
            family_config("New York"),
            &text_with_font("NewYorkLarge-Bold", 24.0),
        );
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("\u{201c}Medium\u{201d} optical size"));

        let report = run_rule(
            Box::new(NewYorkOpticalSize),
            family_config("New York"),
            &text_with_font("NewYorkMedium-Regular", 24.0),
        );
        assert!(report.ok());
    }

    #[test]
    fn test_ny_extra_large_from_54_up() {
        let report = run_rule(
            Box::new(NewYorkOpticalSize),
            family_config("New York"),
            &text_with_font("NewYorkSmall-Regular", 60.0),
        );
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].message.contains("\u{201c}Extra Large\u{201d} optical size"));

        let report = run_rule(
            Box::new(NewYorkOpticalSize),
            family_config("New York"),
            &text_with_font("NewYorkExtraLarge-Regular", 60.0),
        );
        assert!(report.ok());
    }

    #[test]
    fn test_missing_family_option_fails_the_rule() {
        let report = run_rule(
            Box::new(SanFranciscoTextDisplay),
            RuleConfig::enabled(),
            &text_with_font("SFProText-Regular", 17.0),
        );
        assert!(report.violations.is_empty());
        assert_eq!(report.rule_errors.len(), 1);
    }
}
