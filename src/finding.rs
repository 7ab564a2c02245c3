// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding and severity types produced by the rule set.

use serde::{Deserialize, Serialize};

/// Severity tier of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Definite barrier for assistive technology users
    Error,
    /// Likely problem that needs human review
    Warning,
    /// Informational; never lowers the score
    Notice,
}

impl Severity {
    /// Weight applied by the compliance score
    pub fn penalty_weight(&self) -> u32 {
        match self {
            Severity::Error => 5,
            Severity::Warning => 2,
            Severity::Notice => 0,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Notice => write!(f, "NOTICE"),
        }
    }
}

/// A single accessibility issue reported by one rule invocation.
///
/// Findings have no identity beyond their content. Two rules reporting the
/// same thing produce two equal findings and both are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Severity tier; implied by the report bucket when serialized
    #[serde(skip)]
    pub severity: Severity,
    /// Short headline, e.g. "Image missing alt text"
    pub title: String,
    /// What is wrong and who it affects
    pub description: String,
    /// Best-effort reference to the offending element
    #[serde(rename = "selector", skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
    /// Suggested fix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl Finding {
    /// Create a new finding
    pub fn new(severity: Severity, title: &str, description: &str) -> Self {
        Self {
            severity,
            title: title.to_string(),
            description: description.to_string(),
            locator: None,
            recommendation: None,
        }
    }

    /// Shorthand for an error finding
    pub fn error(title: &str, description: &str) -> Self {
        Self::new(Severity::Error, title, description)
    }

    /// Shorthand for a warning finding
    pub fn warning(title: &str, description: &str) -> Self {
        Self::new(Severity::Warning, title, description)
    }

    /// Shorthand for a notice finding
    pub fn notice(title: &str, description: &str) -> Self {
        Self::new(Severity::Notice, title, description)
    }

    /// Set the element locator
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }

    /// Set the recommendation
    pub fn with_recommendation(mut self, recommendation: &str) -> Self {
        self.recommendation = Some(recommendation.to_string());
        self
    }
}
