//! Artboard sizing rules.

use crate::context::RuleContext;
use crate::options::OptionSchema;
use crate::rule::{CheckError, Rule, RuleText};

/// Artboards must use one of a configured list of sizes.
///
/// Sizes are given as `"375x812"` strings; portrait and landscape formats
/// must be listed separately. With `allowExceedingHeight`, an artboard may
/// be taller than a listed size with the same width (scrollable content).
pub struct ArtboardsAllowedSizes;

fn parse_size(raw: &str) -> Result<(f64, f64), CheckError> {
    let parts: Vec<&str> = raw.split('x').collect();
    if let [width, height] = parts[..] {
        if let (Ok(width), Ok(height)) = (width.parse::<f64>(), height.parse::<f64>()) {
            return Ok((width, height));
        }
    }
    Err(CheckError::failed(format!("invalid size '{}'", raw)))
}

impl Rule for ArtboardsAllowedSizes {
    fn name(&self) -> &'static str {
        "artlint/artboards-allowed-sizes"
    }

    fn title(&self) -> RuleText {
        RuleText::Static("Artboards should use one of the allowed sizes")
    }

    fn description(&self) -> RuleText {
        RuleText::Static(
            "For more realistic user interface designs it can be helpful to use a predefined list of view sizes",
        )
    }

    fn options(&self) -> Vec<OptionSchema> {
        vec![
            OptionSchema::string_array("sizes")
                .with_description(
                    "Artboard sizes that are allowed, for example 375x812. Portrait and landscape formats must be defined separately",
                )
                .with_min_length(1),
            OptionSchema::bool("allowExceedingHeight")
                .with_description(
                    "Artboards exceeding the allowed artboard height may be allowed for scrollable content",
                )
                .with_default(false),
        ]
    }

    fn check(&self, ctx: &mut RuleContext) -> Result<(), CheckError> {
        let allow_exceeding_height = ctx.options().bool("allowExceedingHeight")?;
        let sizes = ctx
            .options()
            .string_array("sizes")?
            .iter()
            .map(|raw| parse_size(raw))
            .collect::<Result<Vec<_>, _>>()?;

        for artboard in ctx.artboards() {
            let width = artboard.frame.width;
            let height = artboard.frame.height;
            let matches = sizes
                .iter()
                .filter(|(w, _)| *w == width)
                .any(|(_, h)| {
                    if allow_exceeding_height {
                        height >= *h
                    } else {
                        height == *h
                    }
                });
            if matches {
                continue;
            }

            ctx.report(format!("{}×{} is not an allowed size", width, height), artboard);
        }
        Ok(())
    }
}
