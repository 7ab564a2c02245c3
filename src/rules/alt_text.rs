// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alternative text rule - WCAG 1.1.1 Non-text Content
//!
//! - `<img>` without an `alt` attribute is an error
//! - `<img alt="">` (or whitespace only) is a warning: valid for decorative
//!   images, but worth a human look

use crate::finding::Finding;
use crate::locator::locate;
use crate::markup::Tree;
use crate::rules::Rule;

/// Checks every `<img>` for alt text
pub struct ImageAltRule;

impl Rule for ImageAltRule {
    fn name(&self) -> &str {
        "image-alt"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for alt text (WCAG 1.1.1)"
    }

    fn check(&self, tree: &Tree) -> Vec<Finding> {
        let mut findings = Vec::new();

        for img in tree.select_by_tag("img") {
            match img.attribute("alt") {
                None => {
                    findings.push(
                        Finding::error(
                            "Image missing alt text",
                            "Images must have alt text to be accessible to screen reader users.",
                        )
                        .with_locator(locate(&img))
                        .with_recommendation(
                            "Add descriptive alt text to the image that conveys its purpose or content.",
                        ),
                    );
                }
                Some(alt) if alt.trim().is_empty() => {
                    findings.push(
                        Finding::warning(
                            "Image has empty alt text",
                            "Empty alt text should only be used for decorative images.",
                        )
                        .with_locator(locate(&img))
                        .with_recommendation(
                            "Add descriptive alt text or confirm the image is purely decorative.",
                        ),
                    );
                }
                Some(_) => {}
            }
        }

        findings
    }
}
