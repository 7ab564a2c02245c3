// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form control label rule - WCAG 3.3.2 Labels or Instructions
//!
//! Every `<input>`, `<select>` and `<textarea>` needs an accessible name:
//! `aria-label`, `aria-labelledby`, or an `id` referenced by some
//! `<label for>`. At most one error is reported per control. Attributes with
//! empty values count as absent.

use crate::finding::Finding;
use crate::locator::locate;
use crate::markup::Tree;
use crate::rules::Rule;
use std::collections::HashSet;

const FORM_CONTROLS: &[&str] = &["input", "select", "textarea"];

/// Checks form controls for labels
pub struct FormLabelRule;

impl Rule for FormLabelRule {
    fn name(&self) -> &str {
        "form-labels"
    }

    fn description(&self) -> &str {
        "Checks form controls for an associated label or ARIA name (WCAG 3.3.2)"
    }

    fn check(&self, tree: &Tree) -> Vec<Finding> {
        let label_targets: HashSet<&str> = tree
            .select_by_tag("label")
            .iter()
            .filter_map(|label| label.attribute("for"))
            .collect();

        let mut findings = Vec::new();

        for control in tree.select_by_tags(FORM_CONTROLS) {
            let id = control.non_empty_attribute("id");
            let has_aria_name = control.non_empty_attribute("aria-label").is_some()
                || control.non_empty_attribute("aria-labelledby").is_some();

            match id {
                None if !has_aria_name => {
                    findings.push(
                        Finding::error(
                            "Form control without label",
                            "Form controls must be labeled to be accessible to screen reader users.",
                        )
                        .with_locator(locate(&control))
                        .with_recommendation(
                            "Add a label element with a \"for\" attribute that matches the input's id, or use aria-label/aria-labelledby.",
                        ),
                    );
                }
                Some(id) if !has_aria_name && !label_targets.contains(id) => {
                    findings.push(
                        Finding::error(
                            "Form control with ID but no associated label",
                            "Form controls with IDs should have associated label elements.",
                        )
                        .with_locator(locate(&control))
                        .with_recommendation(
                            "Add a label element with a \"for\" attribute that matches the input's id.",
                        ),
                    );
                }
                _ => {}
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;

    fn check(html: &str) -> Vec<Finding> {
        FormLabelRule.check(&Tree::parse_str(html))
    }

    #[test]
    fn test_unlabelled_input() {
        let findings = check(r#"<form><input type="text"></form>"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].title, "Form control without label");
    }

    #[test]
    fn test_id_without_label() {
        let findings = check(r#"<input id="x">"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "Form control with ID but no associated label");
        assert_eq!(findings[0].locator.as_deref(), Some("#x"));
    }

    #[test]
    fn test_id_with_label() {
        assert!(check(r#"<input id="x"><label for="x">Name</label>"#).is_empty());
    }

    #[test]
    fn test_label_must_match_exactly() {
        let findings = check(r#"<label for="X">Name</label><input id="x">"#);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_aria_names_satisfy_rule() {
        let html = r#"
            <input type="search" aria-label="Search">
            <select aria-labelledby="country-heading"></select>
            <textarea id="bio" aria-label="Biography"></textarea>
        "#;
        assert!(check(html).is_empty());
    }

    #[test]
    fn test_empty_attributes_count_as_absent() {
        let findings = check(r#"<input id="" aria-label="">"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "Form control without label");
    }

    #[test]
    fn test_select_and_textarea_checked_in_order() {
        let findings = check(r#"<textarea class="notes"></textarea><select id="s"></select>"#);
        let locators: Vec<_> = findings.iter().filter_map(|f| f.locator.as_deref()).collect();
        assert_eq!(locators, vec![".notes", "#s"]);
    }

    #[test]
    fn test_one_error_per_control() {
        let findings = check("<input><input><input>");
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.title == "Form control without label"));
    }
}
