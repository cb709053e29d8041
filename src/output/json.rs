//! JSON output formatter.

use crate::finding::{FileResult, Finding, LintReport, LintStatus};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    target: &'a str,
    lint_timestamp: &'a str,
    trusted: bool,
    status: LintStatus,
    passed: bool,
    summary: Summary,
    files: Vec<FileSummary<'a>>,
    findings: &'a [Finding],
}

#[derive(serde::Serialize)]
struct Summary {
    files_scanned: usize,
    files_passed: usize,
    resources_linted: usize,
    lint_errors: usize,
    parse_errors: usize,
}

#[derive(serde::Serialize)]
struct FileSummary<'a> {
    file: &'a std::path::Path,
    passed: bool,
    resources_linted: usize,
    duration_ms: u64,
}

impl<'a> From<&'a FileResult> for FileSummary<'a> {
    fn from(result: &'a FileResult) -> Self {
        FileSummary {
            file: &result.file,
            passed: result.passed(),
            resources_linted: result.resources_linted,
            duration_ms: result.duration_ms,
        }
    }
}

/// Formats a [`LintReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &LintReport) -> String {
    let (lint_errors, parse_errors) = report.count_by_kind();
    let output = JsonOutput {
        target: &report.target,
        lint_timestamp: &report.lint_timestamp,
        trusted: report.trusted,
        status: report.status,
        passed: report.passed,
        summary: Summary {
            files_scanned: report.files_scanned,
            files_passed: report.files_passed(),
            resources_linted: report.resources_linted,
            lint_errors,
            parse_errors,
        },
        files: report.files.iter().map(FileSummary::from).collect(),
        findings: &report.findings,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
