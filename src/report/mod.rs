// SPDX-License-Identifier: PMPL-1.0-or-later
//! Aggregation, scoring and rendering of findings.
//!
//! Findings are partitioned into error, warning and notice buckets without
//! reordering. The compliance score is derived from bucket sizes on demand.
//! Reports render as:
//! - Text: human-readable summary grouped by severity
//! - JSON: `{url, timestamp, score, issues, errors, warnings, notices}`

use crate::error::Result;
use crate::finding::{Finding, Severity};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Result of analyzing one document
#[derive(Debug, Clone)]
pub struct Report {
    /// URL or document name the markup came from
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub notices: Vec<Finding>,
}

/// Bucket sizes, as exposed to report consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    pub total: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub notice_count: usize,
}

/// Group findings by severity into a report.
///
/// Relative order inside each bucket is the order the findings arrived in.
pub fn aggregate(findings: Vec<Finding>, source: &str) -> Report {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut notices = Vec::new();

    for finding in findings {
        match finding.severity {
            Severity::Error => errors.push(finding),
            Severity::Warning => warnings.push(finding),
            Severity::Notice => notices.push(finding),
        }
    }

    Report {
        source: source.to_string(),
        generated_at: Utc::now(),
        errors,
        warnings,
        notices,
    }
}

/// Compliance score in `[0, 100]`.
///
/// `penalty = (5 * errors + 2 * warnings) / max(1, total) * 100`, score is
/// `100 - penalty` rounded and clamped. Notices only grow the denominator.
/// A page with errors and few other findings saturates at 0, so one error
/// and a hundred errors score the same.
pub fn compliance_score(errors: usize, warnings: usize, notices: usize) -> u8 {
    let total = errors + warnings + notices;
    let denominator = total.max(1) as f64;
    let weighted = errors as f64 * f64::from(Severity::Error.penalty_weight())
        + warnings as f64 * f64::from(Severity::Warning.penalty_weight())
        + notices as f64 * f64::from(Severity::Notice.penalty_weight());
    let penalty = weighted / denominator * 100.0;
    (100.0 - penalty).round().clamp(0.0, 100.0) as u8
}

impl Report {
    pub fn score(&self) -> u8 {
        compliance_score(self.errors.len(), self.warnings.len(), self.notices.len())
    }

    pub fn total(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.notices.len()
    }

    pub fn summary(&self) -> IssueSummary {
        IssueSummary {
            total: self.total(),
            error_count: self.errors.len(),
            warning_count: self.warnings.len(),
            notice_count: self.notices.len(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Findings for one severity
    pub fn bucket(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
            Severity::Notice => &self.notices,
        }
    }

    /// All findings: errors, then warnings, then notices
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.notices.iter())
    }
}

/// Serialized shape of a report
#[derive(Serialize)]
struct ReportDocument<'a> {
    url: &'a str,
    timestamp: String,
    score: u8,
    issues: IssueSummary,
    errors: &'a [Finding],
    warnings: &'a [Finding],
    notices: &'a [Finding],
}

impl<'a> From<&'a Report> for ReportDocument<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            url: &report.source,
            timestamp: report
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            score: report.score(),
            issues: report.summary(),
            errors: &report.errors,
            warnings: &report.warnings,
            notices: &report.notices,
        }
    }
}

impl Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ReportDocument::from(self).serialize(serializer)
    }
}

/// Render one report
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Render several reports; JSON output is an array
pub fn render_all(reports: &[Report], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

fn render_text(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("=== Accessibility Report ===\n\n");
    output.push_str(&format!("Source: {}\n", report.source));
    output.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    output.push_str(&format!("Compliance score: {}/100\n", report.score()));

    let summary = report.summary();
    output.push_str(&format!(
        "Found {} issue(s): {} error(s), {} warning(s), {} notice(s)\n\n",
        summary.total, summary.error_count, summary.warning_count, summary.notice_count
    ));

    for severity in [Severity::Error, Severity::Warning, Severity::Notice] {
        let bucket = report.bucket(severity);
        if bucket.is_empty() {
            continue;
        }

        output.push_str(&format!("--- {} ({}) ---\n", severity, bucket.len()));

        for finding in bucket {
            output.push_str(&format!("{}\n", finding.title));
            output.push_str(&format!("  {}\n", finding.description));

            if let Some(ref locator) = finding.locator {
                output.push_str(&format!("  Element: {}\n", locator));
            }

            if let Some(ref recommendation) = finding.recommendation {
                output.push_str(&format!("  Fix: {}\n", recommendation));
            }

            output.push('\n');
        }
    }

    output
}
