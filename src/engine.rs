// SPDX-License-Identifier: PMPL-1.0-or-later
//! Analysis entry points: markup in, report out.
//!
//! The engine never fetches anything. Callers hand it markup that has
//! already been retrieved, together with a source identifier that is only
//! used to label the report.

use crate::error::{AnalyzerError, Result};
use crate::markup::Tree;
use crate::report::{aggregate, Report};
use crate::rules::RuleRegistry;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

/// File extensions picked up by directory scans
const SCANNABLE_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

/// Directories to skip
const SKIP_DIRS: &[&str] = &[
    "node_modules", "target", "dist", "build", "vendor", "coverage",
];

/// Analyze raw markup bytes.
///
/// Fails only when the markup cannot be tokenized; rule evaluation itself
/// cannot fail.
pub fn analyze(markup: &[u8], source: &str, rules: &RuleRegistry) -> Result<Report> {
    let tree = Tree::parse(markup)?;
    Ok(evaluate(&tree, source, rules))
}

/// Analyze markup that is already decoded text
pub fn analyze_str(markup: &str, source: &str, rules: &RuleRegistry) -> Report {
    evaluate(&Tree::parse_str(markup), source, rules)
}

/// Analyze a single file, using its path as the source identifier
pub fn analyze_file(path: &Path, rules: &RuleRegistry) -> Result<Report> {
    let content = std::fs::read(path)?;
    analyze(&content, &path.display().to_string(), rules)
}

/// Analyze every HTML file below `dir`.
///
/// Unreadable or malformed files are logged and skipped; reports come back
/// in path order.
pub fn analyze_directory(dir: &Path, rules: &RuleRegistry) -> Result<Vec<Report>> {
    if !dir.is_dir() {
        return Err(AnalyzerError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not a directory: {}", dir.display()),
        )));
    }

    info!("Scanning directory: {}", dir.display());

    let mut reports = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            if e.depth() > 0 && e.file_type().is_dir() {
                return !SKIP_DIRS.contains(&name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if !SCANNABLE_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        match analyze_file(path, rules) {
            Ok(report) => reports.push(report),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    info!("Analyzed {} document(s)", reports.len());

    Ok(reports)
}

fn evaluate(tree: &Tree, source: &str, rules: &RuleRegistry) -> Report {
    let findings = rules.run(tree);
    let report = aggregate(findings, source);
    info!(
        "Analyzed {} ({} recovered parse error(s)): {} error(s), {} warning(s), {} notice(s), score {}",
        source,
        tree.recovered_errors(),
        report.errors.len(),
        report.warnings.len(),
        report.notices.len(),
        report.score()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_rejects_undecodable_input() {
        let rules = RuleRegistry::with_defaults();
        let result = analyze(&[0xc3, 0x28], "bad", &rules);
        assert!(matches!(result, Err(AnalyzerError::MalformedMarkup(_))));
    }

    #[test]
    fn test_analyze_labels_report_with_source() {
        let rules = RuleRegistry::with_defaults();
        let report = analyze(b"<main><nav></nav></main>", "https://example.com", &rules).unwrap();
        assert_eq!(report.source, "https://example.com");
    }

    #[test]
    fn test_missing_directory_is_error() {
        let rules = RuleRegistry::with_defaults();
        assert!(analyze_directory(Path::new("/nonexistent/path"), &rules).is_err());
    }
}
