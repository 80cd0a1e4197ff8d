//! The compiled-in inline-color migration.

use crate::error::Result;
use crate::transform::RulePipeline;

/// Builds the inline-color migration pipeline.
///
/// Migrates:
/// - gold `var(--color-gold)` inline colors to the `text-gold` class
/// - hardcoded `color`/`background` hex declarations out of `style`
///   attributes, preserving the other declarations
/// - `style` attributes left empty by the above out of the tag entirely
/// - the `bg-white` class to `bg-secondary`
///
/// The rules are ordered and the order is load-bearing: the empty-style
/// cleanup only fires on attributes the color-stripping rules have already
/// emptied, and the exact-match class rule must run before the multi-class
/// one so a lone `bg-white` is rewritten without padding spaces.
///
/// The style rules assume a double-quoted attribute value with no nested
/// quotes; a value violating that simply never matches and the text passes
/// through that rule untouched. This tool pattern-matches text, it does not
/// parse markup.
pub fn inline_color_rules() -> Result<RulePipeline> {
    RulePipeline::new()
        // Swap gold inline colors for the stylesheet class
        .rule(
            r#"style="color:\s*var\(--color-gold\);""#,
            r#"class="text-gold""#,
        )?
        // Strip hardcoded text colors, keeping the other declarations
        .rule(
            r#"style="([^"]*?)color:\s*#666;\s*([^"]*)""#,
            r#"style="${1}${2}""#,
        )?
        .rule(
            r#"style="([^"]*?)color:\s*#333;\s*([^"]*)""#,
            r#"style="${1}${2}""#,
        )?
        .rule(
            r#"style="([^"]*?)color:\s*#555;\s*([^"]*)""#,
            r#"style="${1}${2}""#,
        )?
        // Strip hardcoded backgrounds the same way
        .rule(
            r#"style="([^"]*?)background:\s*#f9f9f9;\s*([^"]*)""#,
            r#"style="${1}${2}""#,
        )?
        .rule(
            r#"style="([^"]*?)background:\s*#fcfbf9;\s*([^"]*)""#,
            r#"style="${1}${2}""#,
        )?
        // Drop style attributes the rules above emptied out
        .rule(r#"\s+style="""#, "")?
        .rule(r#"\s+style="\s+""#, "")?
        // bg-white -> bg-secondary, exact single-class form first
        .rule(r#"class="bg-white""#, r#"class="bg-secondary""#)?
        .rule(
            r#"class="([^"]*?)\s*bg-white\s*([^"]*)""#,
            r#"class="${1} bg-secondary ${2}""#,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_inline_color_becomes_class() {
        let pipeline = inline_color_rules().unwrap();

        assert_eq!(
            pipeline.apply(r#"<a style="color: var(--color-gold);">Home</a>"#),
            r#"<a class="text-gold">Home</a>"#
        );
    }

    #[test]
    fn test_color_stripped_other_declarations_kept() {
        let pipeline = inline_color_rules().unwrap();

        assert_eq!(
            pipeline.apply(r#"<p style="color: #666; margin: 0;">x</p>"#),
            r#"<p style="margin: 0;">x</p>"#
        );
    }

    #[test]
    fn test_lone_color_leaves_no_style_attribute() {
        let pipeline = inline_color_rules().unwrap();

        assert_eq!(
            pipeline.apply(r#"<p style="color: #333;">x</p>"#),
            r#"<p>x</p>"#
        );
    }

    #[test]
    fn test_background_stripped() {
        let pipeline = inline_color_rules().unwrap();

        assert_eq!(
            pipeline.apply(r#"<div style="background: #f9f9f9; padding: 2rem;">x</div>"#),
            r#"<div style="padding: 2rem;">x</div>"#
        );
    }

    #[test]
    fn test_empty_style_removed_neighbors_intact() {
        let pipeline = inline_color_rules().unwrap();

        assert_eq!(
            pipeline.apply(r#"<div class="card" style="" id="top">x</div>"#),
            r#"<div class="card" id="top">x</div>"#
        );
    }

    #[test]
    fn test_whitespace_only_style_removed() {
        let pipeline = inline_color_rules().unwrap();

        assert_eq!(
            pipeline.apply(r#"<div style="   ">x</div>"#),
            r#"<div>x</div>"#
        );
    }

    #[test]
    fn test_class_rewrite_exact() {
        let pipeline = inline_color_rules().unwrap();

        assert_eq!(
            pipeline.apply(r#"<div class="bg-white">x</div>"#),
            r#"<div class="bg-secondary">x</div>"#
        );
    }

    #[test]
    fn test_class_rewrite_among_others() {
        let pipeline = inline_color_rules().unwrap();
        let result = pipeline.apply(r#"<div class="card bg-white shadow">x</div>"#);

        assert!(result.contains("card"));
        assert!(result.contains("bg-secondary"));
        assert!(result.contains("shadow"));
        assert!(!result.contains("bg-white"));
        assert!(!result.contains("  "));
    }

    #[test]
    fn test_untargeted_markup_unchanged() {
        let pipeline = inline_color_rules().unwrap();
        let html = r#"<div class="hero" style="color: #111;">x</div>"#;

        assert_eq!(pipeline.apply(html), html);
    }

    #[test]
    fn test_single_quoted_attribute_never_matches() {
        let pipeline = inline_color_rules().unwrap();
        let html = r#"<p style='color: #666;'>x</p>"#;

        assert_eq!(pipeline.apply(html), html);
    }

    #[test]
    fn test_idempotent() {
        let pipeline = inline_color_rules().unwrap();
        let html = concat!(
            r#"<a style="color: var(--color-gold);">Home</a>"#,
            r#"<p style="color: #666; margin: 0;">x</p>"#,
            r#"<p style="color: #555;">y</p>"#,
            r#"<div class="card bg-white shadow">z</div>"#,
            r#"<div class="bg-white">w</div>"#,
        );

        let once = pipeline.apply(html);
        let twice = pipeline.apply(&once);

        assert_eq!(once, twice);
    }
}
