//! # pipeline-lint
//!
//! Static linter for CI pipeline manifests.
//!
//! `pipeline-lint` loads pipeline YAML, then checks every pipeline resource
//! for an unsupported platform, malformed steps and services, reserved
//! volume names, and host-level privileges (host volumes, host ports,
//! devices, privileged mode, custom DNS or networking) that only trusted
//! repositories may use. Each resource is reported with its **first**
//! violation.
//!
//! ## Quick start
//!
//! ```rust
//! use pipeline_lint::{linter, manifest};
//!
//! let yaml = "\
//! kind: pipeline
//! name: default
//! steps:
//! - name: build
//!   image: golang
//!   privileged: true
//! ";
//!
//! let manifest = manifest::parse_str(yaml).unwrap();
//! let err = linter::lint(&manifest.resources[0], false).unwrap_err();
//! assert_eq!(err.to_string(), "linter: untrusted repositories cannot enable privileged mode");
//! assert!(linter::lint(&manifest.resources[0], true).is_ok());
//! ```
//!
//! ## Architecture
//!
//! 1. **[`resource`]**: typed pipeline, secret and signature documents.
//! 2. **[`manifest`]**: multi-document YAML loading.
//! 3. **[`linter`]**: the rule engine, first violation wins.
//! 4. **[`rules`]**: metadata for every rule.
//! 5. **[`run`]**: discover files, lint them in parallel, build a [`finding::LintReport`].
//! 6. **[`output`]**: render reports as pretty text, JSON, or [SARIF].
//! 7. **[`config`]**: TOML configuration.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod finding;
pub mod linter;
pub mod manifest;
pub mod output;
pub mod resource;
pub mod rules;
pub mod run;
