//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes: a header, one
//! status line per file, the findings with their resource and remediation,
//! and a one-line summary.

use crate::finding::{LintReport, LintStatus};
use colored::Colorize;

/// Formats a [`LintReport`] as human-readable, ANSI-colored text.
pub fn format(report: &LintReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  Pipeline Lint: {}  ", report.target)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!(
        "  Timestamp: {}\n  Trusted:   {}\n\n",
        report.lint_timestamp, report.trusted
    ));

    // Per-file status
    out.push_str(&format!("{}\n", "Files".bold().underline()));
    for result in &report.files {
        let icon = if result.parse_failed {
            "ERR ".red().bold().to_string()
        } else if result.passed() {
            "PASS".green().bold().to_string()
        } else {
            "FAIL".red().bold().to_string()
        };
        let detail = format!(
            "{} resources, {} findings",
            result.resources_linted,
            result.findings.len()
        );
        out.push_str(&format!(
            "  [{icon}] {file:<40} {}\n",
            detail.dimmed(),
            file = result.file.display(),
        ));
    }
    out.push('\n');

    if !report.findings.is_empty() {
        out.push_str(&format!("{}\n", "Findings".bold().underline()));
        for finding in &report.findings {
            out.push_str(&format!(
                "  [{}] {rule_id:<25} {message}\n",
                "ERROR".red().bold(),
                rule_id = finding.rule_id.dimmed(),
                message = finding.message,
            ));

            let mut location = finding
                .file
                .as_ref()
                .map(|f| f.display().to_string())
                .unwrap_or_default();
            if let Some(doc) = finding.document {
                location.push_str(&format!(" (document {})", doc + 1));
            }
            if let Some(ref name) = finding.resource {
                location.push_str(&format!(" pipeline '{name}'"));
            }
            if !location.is_empty() {
                out.push_str(&format!("         {}\n", location.dimmed()));
            }
            if let Some(ref remediation) = finding.remediation {
                out.push_str(&format!("         > {}\n", remediation.dimmed()));
            }
        }
        out.push('\n');
    }

    // Summary
    let status_str = match report.status {
        LintStatus::Passed => "PASSED".green().bold().to_string(),
        LintStatus::Failed => "FAILED".red().bold().to_string(),
    };
    let (lint_errors, parse_errors) = report.count_by_kind();
    out.push_str(&format!(
        "Result: {status_str}  |  {} files, {} resources, {} lint errors, {} parse errors\n",
        report.files_scanned, report.resources_linted, lint_errors, parse_errors,
    ));

    out
}
