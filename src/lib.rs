// SPDX-License-Identifier: PMPL-1.0-or-later
//! accessibility-analyzer - static accessibility rule engine for HTML pages
//!
//! Parses already-retrieved markup into a read-only tree, runs a registry of
//! independent structural rules over it, and aggregates the findings into a
//! report with errors, warnings and notices plus a 0-100 compliance score.
//!
//! ## Rules
//!
//! - **image-alt**: `<img>` alternative text present and non-empty
//! - **form-labels**: form controls carry a label or ARIA name
//! - **heading-hierarchy**: page starts at h1 and never skips levels
//! - **landmarks**: `<main>` and `<nav>` regions exist
//! - **color-contrast**: notice that contrast is outside static analysis
//!
//! ## Example
//!
//! ```
//! use accessibility_analyzer::engine;
//! use accessibility_analyzer::rules::RuleRegistry;
//!
//! let rules = RuleRegistry::with_defaults();
//! let report = engine::analyze_str("<main><img src=\"a.png\"></main>", "inline", &rules);
//! assert_eq!(report.errors.len(), 1);
//! assert_eq!(report.score(), 0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod finding;
pub mod locator;
pub mod markup;
pub mod report;
pub mod rules;

pub use error::{AnalyzerError, Result};
pub use finding::{Finding, Severity};
pub use markup::{Element, Tree};
pub use report::{aggregate, compliance_score, Report};
pub use rules::{Rule, RuleRegistry};
