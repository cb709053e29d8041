//! Lint orchestration.
//!
//! [`run_lint`] is the main entry point: it discovers manifests under a path,
//! lints every file in parallel via [rayon], and assembles a [`LintReport`].
//! Within a file each resource is linted independently, so one rejected
//! pipeline does not hide problems in the next document.

use crate::config::Config;
use crate::finding::{FileResult, Finding, LintReport};
use crate::linter;
use crate::manifest;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Lints `path` (a file or a directory) and returns the report.
///
/// Files are reported in discovery order regardless of which thread linted
/// them.
///
/// ```rust,no_run
/// use std::path::Path;
/// use pipeline_lint::{config::Config, run};
///
/// let config = Config::load(None).unwrap();
/// let report = run::run_lint(Path::new(".drone.yml"), &config);
/// std::process::exit(if report.passed { 0 } else { 1 });
/// ```
pub fn run_lint(path: &Path, config: &Config) -> LintReport {
    let files = discover(path, config);
    let trusted = config.trust.enabled;
    log::info!(
        "linting {} file(s) under {} (trusted: {trusted})",
        files.len(),
        path.display()
    );

    let results: Vec<FileResult> = files
        .par_iter()
        .map(|file| lint_file(file, trusted))
        .collect();

    LintReport::from_results(&path.display().to_string(), results, trusted)
}

/// Loads one manifest and lints each of its resources.
///
/// A file that fails to load yields a single `yaml/parse-error` finding.
pub fn lint_file(path: &Path, trusted: bool) -> FileResult {
    let start = Instant::now();

    let manifest = match manifest::parse_file(path) {
        Ok(m) => m,
        Err(err) => {
            log::warn!("{}: {err}", path.display());
            return FileResult {
                file: path.to_path_buf(),
                resources_linted: 0,
                findings: vec![Finding::from_parse_error(&err, path)],
                parse_failed: true,
                duration_ms: start.elapsed().as_millis() as u64,
            };
        }
    };

    let findings = manifest
        .resources
        .iter()
        .enumerate()
        .filter_map(|(index, resource)| {
            linter::lint(resource, trusted)
                .err()
                .map(|err| Finding::from_lint_error(&err, path, index, resource))
        })
        .collect();

    FileResult {
        file: path.to_path_buf(),
        resources_linted: manifest.resources.len(),
        findings,
        parse_failed: false,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

/// Collects the manifests to lint.
///
/// A file path is returned as-is, whatever its extension. A directory is
/// walked recursively, skipping [excluded](crate::config::DiscoveryConfig::exclude)
/// directory names and keeping files with a configured extension, sorted
/// by path.
pub fn discover(path: &Path, config: &Config) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let discovery = &config.discovery;
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !discovery.is_excluded(&e.file_name().to_string_lossy())
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && discovery.matches(e.path()))
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}
