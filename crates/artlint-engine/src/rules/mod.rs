//! Built-in style and accessibility rules.

use crate::config::{RuleConfig, RuleSetConfig};
use crate::options::OptionValue;
use crate::rule::Rule;

pub mod artboards;
pub mod fonts;
pub mod tap_targets;
pub mod text;

pub use artboards::ArtboardsAllowedSizes;
pub use fonts::{FontWeightsAllowed, NewYorkOpticalSize, SanFranciscoTextDisplay};
pub use tap_targets::{InteractiveElementMinSize, SymbolsMinSize};
pub use text::IncludesEllipsis;

/// Returns all built-in rules, in their canonical registration order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ArtboardsAllowedSizes),
        Box::new(SymbolsMinSize),
        Box::new(InteractiveElementMinSize),
        Box::new(SanFranciscoTextDisplay),
        Box::new(NewYorkOpticalSize),
        Box::new(FontWeightsAllowed),
        Box::new(IncludesEllipsis),
    ]
}

/// The recommended configuration: every built-in rule active, tuned for
/// iOS/iPadOS accessibility review.
pub fn recommended_config() -> RuleSetConfig {
    RuleSetConfig::new()
        .with_rule(
            "artlint/artboards-allowed-sizes",
            RuleConfig::enabled()
                .with_rule_title("Artboards should match any iPhone or iPad display or be taller")
                .with_option(
                    "sizes",
                    OptionValue::strings([
                        // Apple Watch
                        "136x170", "170x136", "156x195", "195x156", "162x197", "197x162",
                        "184x224", "224x184", "176x215", "215x176", "198x242", "242x198",
                        // Apple TV
                        "1920x1080", "1080x1920",
                        // Apple Touch Bar
                        "1085x30",
                        // iPhone
                        "375x667", "667x375", "375x812", "812x375", "414x896", "896x414",
                        "390x844", "844x390", "428x926", "926x428",
                        // iPad
                        "768x1024", "1024x768", "744x1133", "1133x744", "810x1080",
                        "1080x810", "834x1112", "1112x834", "820x1180", "1180x820",
                        "1024x1366", "1366x1024",
                    ]),
                )
                .with_option("allowExceedingHeight", true),
        )
        .with_rule(
            "artlint/symbols-min-size",
            RuleConfig::enabled()
                .with_rule_title("Buttons should have a minimum size of 44x44")
                .with_option("minSize", 44.0)
                .with_option("namePattern", ".*(action|button|btn|cta|icon|link).*"),
        )
        .with_rule(
            "artlint/interactive-element-min-size",
            RuleConfig::enabled().with_option("minSize", 44.0),
        )
        .with_rule(
            "artlint/sf-text-display",
            RuleConfig::enabled().with_option("pattern", "San Francisco"),
        )
        .with_rule(
            "artlint/ny-optical-size",
            RuleConfig::enabled().with_option("pattern", "New York"),
        )
        .with_rule(
            "artlint/font-weights-allowed",
            RuleConfig::enabled().with_option(
                "pattern",
                OptionValue::strings(["Regular", "Medium", "Semibold", "Bold"]),
            ),
        )
        .with_rule("artlint/includes-ellipsis", RuleConfig::enabled())
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_all_rules_have_unique_names() {
        let rules = all_rules();
        let names: HashSet<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), rules.len());
    }

    #[test]
    fn test_recommended_config_activates_every_rule() {
        let config = recommended_config();
        for rule in all_rules() {
            let entry = config
                .rule(rule.name())
                .unwrap_or_else(|| panic!("no config entry for {}", rule.name()));
            assert!(entry.active, "{} should be active", rule.name());
        }
    }
}
