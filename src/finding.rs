use std::path::{Path, PathBuf};

use crate::linter::LintError;
use crate::manifest::ParseError;
use crate::resource::Resource;
use crate::rules::PARSE_ERROR_RULE;

/// A single rejected resource, or a file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub rule_id: String,
    /// The exact diagnostic, e.g. `linter: duplicate step names`.
    pub message: String,
    pub file: Option<PathBuf>,
    /// Name of the offending resource, when it has one.
    pub resource: Option<String>,
    /// Resource kind (`pipeline`, `secret`, …); unknown for parse failures.
    pub kind: Option<String>,
    /// Position of the resource among the file's documents.
    pub document: Option<usize>,
    pub remediation: Option<String>,
}

impl Finding {
    pub fn from_lint_error(
        err: &LintError,
        file: &Path,
        document: usize,
        resource: &Resource,
    ) -> Self {
        let name = resource.name();
        Finding {
            rule_id: err.rule_id().to_string(),
            message: err.to_string(),
            file: Some(file.to_path_buf()),
            resource: (!name.is_empty()).then(|| name.to_string()),
            kind: Some(resource.kind().to_string()),
            document: Some(document),
            remediation: crate::rules::find_rule(err.rule_id()).map(|r| r.remediation.to_string()),
        }
    }

    pub fn from_parse_error(err: &ParseError, file: &Path) -> Self {
        let document = match err {
            ParseError::Document { index, .. } | ParseError::MissingKind { index } => Some(*index),
            ParseError::Io { .. } | ParseError::Syntax(_) => None,
        };
        Finding {
            rule_id: PARSE_ERROR_RULE.to_string(),
            message: err.to_string(),
            file: Some(file.to_path_buf()),
            resource: None,
            kind: None,
            document,
            remediation: crate::rules::find_rule(PARSE_ERROR_RULE)
                .map(|r| r.remediation.to_string()),
        }
    }
}

/// Outcome of linting one file.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub resources_linted: usize,
    pub findings: Vec<Finding>,
    pub parse_failed: bool,
    pub duration_ms: u64,
}

impl FileResult {
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct LintReport {
    /// The file or directory that was linted.
    pub target: String,
    pub lint_timestamp: String,
    pub trusted: bool,
    pub status: LintStatus,
    pub files_scanned: usize,
    pub resources_linted: usize,
    pub files: Vec<FileResult>,
    pub findings: Vec<Finding>,
    pub passed: bool,
}

impl LintReport {
    pub fn from_results(target: &str, files: Vec<FileResult>, trusted: bool) -> Self {
        let files_scanned = files.len();
        let resources_linted = files.iter().map(|f| f.resources_linted).sum();
        let findings: Vec<Finding> = files
            .iter()
            .flat_map(|f| f.findings.iter().cloned())
            .collect();

        let status = if findings.is_empty() {
            LintStatus::Passed
        } else {
            LintStatus::Failed
        };
        let passed = matches!(status, LintStatus::Passed);

        LintReport {
            target: target.to_string(),
            lint_timestamp: chrono::Utc::now().to_rfc3339(),
            trusted,
            status,
            files_scanned,
            resources_linted,
            files,
            findings,
            passed,
        }
    }

    /// Count lint violations and load failures in a single pass.
    ///
    /// Returns `(lint_errors, parse_errors)`.
    pub fn count_by_kind(&self) -> (usize, usize) {
        self.findings.iter().fold((0, 0), |(lint, parse), f| {
            if f.rule_id == PARSE_ERROR_RULE {
                (lint, parse + 1)
            } else {
                (lint + 1, parse)
            }
        })
    }

    /// Number of files whose every resource passed.
    pub fn files_passed(&self) -> usize {
        self.files.iter().filter(|f| f.passed()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintStatus {
    Passed,
    Failed,
}
