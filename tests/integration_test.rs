// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for accessibility-analyzer

use accessibility_analyzer::config::RulesConfig;
use accessibility_analyzer::engine;
use accessibility_analyzer::locator::locate;
use accessibility_analyzer::markup::Tree;
use accessibility_analyzer::report::{render, OutputFormat};
use accessibility_analyzer::rules::RuleRegistry;
use accessibility_analyzer::{AnalyzerError, Finding, Report, Severity};
use std::path::Path;
use tempfile::TempDir;

fn titles(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.title.as_str()).collect()
}

#[test]
fn test_accessible_fixture_scores_100() {
    let rules = RuleRegistry::with_defaults();
    let report = engine::analyze_file(Path::new("tests/fixtures/accessible.html"), &rules)
        .expect("analysis should succeed");

    assert!(report.errors.is_empty(), "unexpected errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
    assert_eq!(titles(&report.notices), vec!["Color contrast not checked"]);
    assert_eq!(report.score(), 100);
}

#[test]
fn test_inaccessible_fixture() {
    let rules = RuleRegistry::with_defaults();
    let report = engine::analyze_file(Path::new("tests/fixtures/inaccessible.html"), &rules)
        .expect("analysis should succeed");

    assert_eq!(
        titles(&report.errors),
        vec![
            "Image missing alt text",
            "Form control without label",
            "Form control with ID but no associated label",
            "Form control without label",
        ]
    );
    assert_eq!(
        titles(&report.warnings),
        vec![
            "Image has empty alt text",
            "First heading is not h1",
            "Skipped heading level",
            "No main landmark",
        ]
    );
    assert_eq!(
        titles(&report.notices),
        vec!["Color contrast not checked", "No navigation landmark"]
    );

    let locators: Vec<_> = report.errors.iter().map(|f| f.locator.as_deref()).collect();
    assert_eq!(
        locators,
        vec![Some("img"), Some("input"), Some("#email"), Some("textarea")]
    );
    assert_eq!(report.warnings[0].locator.as_deref(), Some(".spacer"));
    assert_eq!(report.warnings[2].locator.as_deref(), Some("#sale"));
    assert_eq!(report.score(), 0);
}

#[test]
fn test_broken_markup_still_analyzed() {
    let rules = RuleRegistry::with_defaults();
    let report = engine::analyze_file(Path::new("tests/fixtures/broken.html"), &rules)
        .expect("recoverable markup should parse");

    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(report.notices.len(), 2);
}

#[test]
fn test_minimal_document_baseline() {
    let rules = RuleRegistry::with_defaults();
    let report = engine::analyze_str("<p>Hello</p>", "minimal", &rules);

    assert_eq!(report.total(), 3);
    assert_eq!(titles(&report.warnings), vec!["No main landmark"]);
    assert_eq!(
        titles(&report.notices),
        vec!["Color contrast not checked", "No navigation landmark"]
    );
}

#[test]
fn test_error_only_saturates_score() {
    let mut rules = RuleRegistry::new();
    rules.register(Box::new(accessibility_analyzer::rules::alt_text::ImageAltRule));
    let report = engine::analyze_str(r#"<img src="a.png">"#, "single", &rules);

    assert_eq!(report.total(), 1);
    assert_eq!(report.errors[0].severity, Severity::Error);
    assert_eq!(report.score(), 0);
}

#[test]
fn test_heading_sequence_h2_h1_h4() {
    let rules = RuleRegistry::with_defaults();
    let report = engine::analyze_str("<main><nav></nav><h2>a</h2><h1>b</h1><h4>c</h4></main>", "h", &rules);

    assert_eq!(
        titles(&report.warnings),
        vec!["First heading is not h1", "Skipped heading level"]
    );
    assert!(report.warnings[1].description.contains("from h1 to h4"));
}

#[test]
fn test_form_label_cases() {
    let rules = RuleRegistry::with_defaults();

    let report = engine::analyze_str("<input>", "a", &rules);
    assert_eq!(titles(&report.errors), vec!["Form control without label"]);

    let report = engine::analyze_str(r#"<input id="x">"#, "b", &rules);
    assert_eq!(
        titles(&report.errors),
        vec!["Form control with ID but no associated label"]
    );

    let report = engine::analyze_str(r#"<input id="x"><label for="x">X</label>"#, "c", &rules);
    assert!(report.errors.is_empty());
}

#[test]
fn test_idempotent_apart_from_timestamp() {
    let rules = RuleRegistry::with_defaults();
    let markup = std::fs::read("tests/fixtures/inaccessible.html").expect("fixture exists");

    let first = engine::analyze(&markup, "page", &rules).expect("parses");
    let second = engine::analyze(&markup, "page", &rules).expect("parses");

    let strip = |report: &Report| {
        let mut value: serde_json::Value = serde_json::to_value(report).expect("serializable");
        value
            .as_object_mut()
            .expect("object")
            .remove("timestamp");
        serde_json::to_string(&value).expect("serializable")
    };
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn test_undecodable_input_is_fatal() {
    let rules = RuleRegistry::with_defaults();
    let result = engine::analyze(b"<p>\xff\xfe</p>", "binary", &rules);
    assert!(matches!(result, Err(AnalyzerError::MalformedMarkup(_))));
}

#[test]
fn test_disabled_rules_are_not_run() {
    let rules = RuleRegistry::from_config(&RulesConfig {
        disabled: vec!["landmarks".to_string(), "color-contrast".to_string()],
    });
    let report = engine::analyze_str("<p>Hello</p>", "quiet", &rules);
    assert_eq!(report.total(), 0);
    assert_eq!(report.score(), 100);
}

#[test]
fn test_locator_prefers_id() {
    let tree = Tree::parse_str(r#"<div id="a" class="b c"></div>"#);
    assert_eq!(locate(&tree.select_by_tag("div")[0]), "#a");
}

#[test]
fn test_analyze_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("b.html"), "<main><nav></nav><img></main>").unwrap();
    std::fs::write(dir.path().join("a.htm"), "<main><nav></nav></main>").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "<img>").unwrap();
    std::fs::create_dir(dir.path().join("node_modules")).unwrap();
    std::fs::write(dir.path().join("node_modules").join("c.html"), "<img>").unwrap();

    let rules = RuleRegistry::with_defaults();
    let reports = engine::analyze_directory(dir.path(), &rules).expect("scan should succeed");

    assert_eq!(reports.len(), 2);
    assert!(reports[0].source.ends_with("a.htm"));
    assert_eq!(reports[0].score(), 100);
    assert!(reports[1].source.ends_with("b.html"));
    assert!(reports[1].has_errors());
}

#[test]
fn test_json_report_shape() {
    let rules = RuleRegistry::with_defaults();
    let report = engine::analyze_file(Path::new("tests/fixtures/inaccessible.html"), &rules)
        .expect("analysis should succeed");

    let json = render(&report, OutputFormat::Json).expect("renders");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(parsed["issues"]["total"], 10);
    assert_eq!(parsed["issues"]["errorCount"], 4);
    assert_eq!(parsed["issues"]["warningCount"], 4);
    assert_eq!(parsed["issues"]["noticeCount"], 2);
    assert_eq!(parsed["errors"][0]["title"], "Image missing alt text");
    assert_eq!(parsed["errors"][0]["selector"], "img");
    assert!(parsed["notices"][1].get("selector").is_none());
}
