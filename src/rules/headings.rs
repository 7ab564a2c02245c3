// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy rule - WCAG 1.3.1 Info and Relationships
//!
//! Headings are visited in document order. The first one should be `<h1>`,
//! and no heading may go deeper than one level below its predecessor.
//! Moving back up any number of levels is fine.

use crate::finding::Finding;
use crate::locator::locate;
use crate::markup::{Element, Tree};
use crate::rules::Rule;
use tracing::trace;

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Checks heading order
pub struct HeadingHierarchyRule;

impl Rule for HeadingHierarchyRule {
    fn name(&self) -> &str {
        "heading-hierarchy"
    }

    fn description(&self) -> &str {
        "Checks that headings start at h1 and never skip a level (WCAG 1.3.1)"
    }

    fn check(&self, tree: &Tree) -> Vec<Finding> {
        let mut findings = Vec::new();
        // 0 until the first heading has been seen
        let mut previous_level: u8 = 0;

        for heading in tree.select_by_tags(HEADING_TAGS) {
            let Some(level) = heading_level(&heading) else {
                trace!("Skipping heading with unreadable level: {:?}", heading);
                continue;
            };

            if previous_level == 0 && level != 1 {
                findings.push(
                    Finding::warning(
                        "First heading is not h1",
                        "The first heading on a page should usually be h1.",
                    )
                    .with_locator(locate(&heading))
                    .with_recommendation(
                        "Change this heading to an h1 if it represents the main title of the page.",
                    ),
                );
            }

            if previous_level > 0 && level > previous_level + 1 {
                findings.push(
                    Finding::warning(
                        "Skipped heading level",
                        &format!(
                            "Jumped from h{} to h{}, skipping at least one level.",
                            previous_level, level
                        ),
                    )
                    .with_locator(locate(&heading))
                    .with_recommendation(
                        "Maintain a proper heading hierarchy without skipping levels.",
                    ),
                );
            }

            previous_level = level;
        }

        findings
    }
}

fn heading_level(heading: &Element<'_>) -> Option<u8> {
    let tag = heading.tag_name();
    tag.strip_prefix('h')
        .or_else(|| tag.strip_prefix('H'))
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
}
