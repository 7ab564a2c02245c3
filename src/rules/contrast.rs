// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast notice - WCAG 1.4.3
//!
//! Contrast depends on computed styles, which static markup analysis cannot
//! see. This rule records that gap on every report instead of inspecting
//! the tree.

use crate::finding::Finding;
use crate::markup::Tree;
use crate::rules::Rule;

/// Emits a single notice that contrast was not evaluated
pub struct ContrastNoticeRule;

impl Rule for ContrastNoticeRule {
    fn name(&self) -> &str {
        "color-contrast"
    }

    fn description(&self) -> &str {
        "Notes that color contrast (WCAG 1.4.3) requires a manual check"
    }

    fn check(&self, _tree: &Tree) -> Vec<Finding> {
        vec![Finding::notice(
            "Color contrast not checked",
            "This automated test cannot check color contrast, which is important for users with low vision.",
        )
        .with_recommendation(
            "Use a tool like WebAIM's Contrast Checker to verify sufficient contrast ratios.",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;

    #[test]
    fn test_always_one_notice() {
        for html in ["", "<main><nav></nav></main>", "<img><h3>x</h3>"] {
            let findings = ContrastNoticeRule.check(&Tree::parse_str(html));
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].severity, Severity::Notice);
            assert!(findings[0].locator.is_none());
        }
    }
}
