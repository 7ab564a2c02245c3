// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility rules and the registry that runs them.
//!
//! Each rule inspects the parsed tree on its own and returns findings in
//! document order. Rules share no state, so the registry can run them in any
//! order; it uses registration order to keep reports reproducible.

pub mod alt_text;
pub mod contrast;
pub mod form_labels;
pub mod headings;
pub mod landmarks;

use crate::config::RulesConfig;
use crate::finding::Finding;
use crate::markup::Tree;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Trait implemented by all rules
pub trait Rule: Send + Sync {
    /// Registry key, e.g. "image-alt"
    fn name(&self) -> &str;

    /// Short description of what this rule checks
    fn description(&self) -> &str;

    /// Inspect the tree and return findings.
    ///
    /// Must not fail: elements the rule cannot evaluate are skipped.
    fn check(&self, tree: &Tree) -> Vec<Finding>;
}

/// Explicit name -> rule mapping, iterated in registration order
#[derive(Default)]
pub struct RuleRegistry {
    rules: IndexMap<String, Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in rule set
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(alt_text::ImageAltRule));
        registry.register(Box::new(form_labels::FormLabelRule));
        registry.register(Box::new(headings::HeadingHierarchyRule));
        registry.register(Box::new(contrast::ContrastNoticeRule));
        registry.register(Box::new(landmarks::LandmarkRule));
        registry
    }

    /// Built-in rules minus those disabled in configuration
    pub fn from_config(config: &RulesConfig) -> Self {
        let mut registry = Self::with_defaults();
        for name in &config.disabled {
            if registry.remove(name).is_none() {
                warn!("Unknown rule in disabled list: {}", name);
            }
        }
        registry
    }

    /// Add a rule. A rule with the same name is replaced in place.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.insert(rule.name().to_string(), rule);
    }

    /// Remove a rule by name, keeping the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Rule>> {
        self.rules.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Rule + 'static)> {
        self.rules.get(name).map(|rule| rule.as_ref())
    }

    /// Registered rule names in run order
    pub fn names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// Iterate rules in run order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Rule + 'static)> + '_ {
        self.rules.values().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against the tree and concatenate their findings
    pub fn run(&self, tree: &Tree) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (name, rule) in &self.rules {
            let produced = rule.check(tree);
            debug!("Rule {} produced {} finding(s)", name, produced.len());
            findings.extend(produced);
        }
        findings
    }
}
