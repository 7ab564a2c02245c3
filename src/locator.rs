// SPDX-License-Identifier: PMPL-1.0-or-later
//! Human-readable element references for findings.
//!
//! A locator is a best-effort CSS-like hint (`#id`, `.a.b` or a tag name).
//! It is meant for a person reading the report, not for re-selecting the
//! element, and two elements may share one.

use crate::markup::Element;
use regex::Regex;
use std::sync::OnceLock;

fn whitespace_runs() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Derive a locator from the element's own attributes.
///
/// Priority: non-empty `id`, then non-empty `class`, then the tag name.
/// Every whitespace run in the class value becomes a `.`, untrimmed, so
/// `" a  b "` yields `..a.b.`.
pub fn locate(element: &Element<'_>) -> String {
    if let Some(id) = element.non_empty_attribute("id") {
        return format!("#{}", id);
    }

    if let Some(class) = element.non_empty_attribute("class") {
        return format!(".{}", whitespace_runs().replace_all(class, "."));
    }

    element.tag_name().to_string()
}
