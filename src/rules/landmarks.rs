// SPDX-License-Identifier: PMPL-1.0-or-later
//! Landmark rule - WCAG 1.3.1 / 2.4.1
//!
//! Page-level check for the `<main>` and `<nav>` regions screen reader users
//! jump between. Findings carry no locator since they describe an absence.

use crate::finding::Finding;
use crate::markup::Tree;
use crate::rules::Rule;

/// Checks for main and navigation landmarks
pub struct LandmarkRule;

impl Rule for LandmarkRule {
    fn name(&self) -> &str {
        "landmarks"
    }

    fn description(&self) -> &str {
        "Checks for <main> and <nav> landmark regions"
    }

    fn check(&self, tree: &Tree) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !tree.contains_tag("main") {
            findings.push(
                Finding::warning(
                    "No main landmark",
                    "Pages should have a main landmark to indicate the primary content area.",
                )
                .with_recommendation("Add a <main> element to wrap the main content of the page."),
            );
        }

        if !tree.contains_tag("nav") {
            findings.push(
                Finding::notice(
                    "No navigation landmark",
                    "Pages with navigation should use a nav element.",
                )
                .with_recommendation("Add a <nav> element to wrap navigation links."),
            );
        }

        findings
    }
}
