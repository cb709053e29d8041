//! Pipeline rule engine.
//!
//! [`lint`] validates a single [`Resource`] against a fixed rule set and
//! returns the **first** violation as a [`LintError`]. Rules are evaluated in
//! a fixed order, and that order is observable through the diagnostic:
//!
//! 1. [`platform`]: supported OS and architecture.
//! 2. [`pipeline`]: build image, then every volume ([`volume`]), then name
//!    uniqueness, then every service and step ([`container`]).
//!
//! Rules marked *trust-gated* only apply when the repository is untrusted.
//! They are declared as `(Privilege, predicate)` tables in [`volume`] and
//! [`container`] so the privilege policy can be read in one place.
//!
//! ```
//! use pipeline_lint::linter::lint_pipeline;
//! use pipeline_lint::resource::{Container, Pipeline};
//!
//! let mut pipeline = Pipeline::default();
//! pipeline.steps.push(Container {
//!     name: "build".into(),
//!     image: "golang".into(),
//!     privileged: true,
//!     ..Default::default()
//! });
//!
//! let err = lint_pipeline(&pipeline, false).unwrap_err();
//! assert_eq!(err.to_string(), "linter: untrusted repositories cannot enable privileged mode");
//! assert!(lint_pipeline(&pipeline, true).is_ok());
//! ```

pub mod container;
pub mod pipeline;
pub mod platform;
pub mod volume;

pub use pipeline::check_resource;
pub use platform::check_platform;

use crate::resource::{Pipeline, Resource};
use std::fmt;
use thiserror::Error;

/// A rule violation. The `Display` output is the user-facing diagnostic and
/// is stable: downstream tooling matches on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintError {
    #[error("linter: unsupported os: {0}")]
    UnsupportedOs(String),

    #[error("linter: unsupported architecture: {0}")]
    UnsupportedArch(String),

    #[error("linter: invalid or missing build image")]
    MissingBuildImage,

    #[error("linter: invalid volume name: {0}")]
    ReservedVolumeName(String),

    /// `name` is the first repeated name, kept for reporting.
    #[error("linter: duplicate step names")]
    DuplicateStepName { name: String },

    #[error("linter: invalid or missing name")]
    MissingName,

    #[error("linter: invalid or missing image")]
    MissingImage,

    #[error("linter: untrusted repositories cannot {0}")]
    Untrusted(Privilege),
}

impl LintError {
    /// Stable rule identifier, as listed by [`rules::all_rules`](crate::rules::all_rules).
    pub fn rule_id(&self) -> &'static str {
        match self {
            LintError::UnsupportedOs(_) => "platform/unsupported-os",
            LintError::UnsupportedArch(_) => "platform/unsupported-arch",
            LintError::MissingBuildImage => "build/missing-image",
            LintError::ReservedVolumeName(_) => "volume/reserved-name",
            LintError::DuplicateStepName { .. } => "step/duplicate-name",
            LintError::MissingName => "container/missing-name",
            LintError::MissingImage => "container/missing-image",
            LintError::Untrusted(privilege) => privilege.rule_id(),
        }
    }

    /// Returns `true` if the violation would not occur in a trusted repository.
    pub fn is_trust_gated(&self) -> bool {
        matches!(self, LintError::Untrusted(_))
    }
}

/// A host-level capability only trusted repositories may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privilege {
    HostVolume,
    MemoryVolume,
    HostPort,
    Devices,
    Privileged,
    Dns,
    DnsSearch,
    ExtraHosts,
    NetworkMode,
}

impl Privilege {
    /// Every privilege, volumes first, then containers in evaluation order.
    pub const ALL: [Privilege; 9] = [
        Privilege::HostVolume,
        Privilege::MemoryVolume,
        Privilege::HostPort,
        Privilege::Devices,
        Privilege::Privileged,
        Privilege::Dns,
        Privilege::DnsSearch,
        Privilege::ExtraHosts,
        Privilege::NetworkMode,
    ];

    pub fn rule_id(self) -> &'static str {
        match self {
            Privilege::HostVolume => "trust/host-volume",
            Privilege::MemoryVolume => "trust/memory-volume",
            Privilege::HostPort => "trust/host-port",
            Privilege::Devices => "trust/devices",
            Privilege::Privileged => "trust/privileged",
            Privilege::Dns => "trust/dns",
            Privilege::DnsSearch => "trust/dns-search",
            Privilege::ExtraHosts => "trust/extra-hosts",
            Privilege::NetworkMode => "trust/network-mode",
        }
    }

    /// The action phrase completing "untrusted repositories cannot …".
    pub fn action(self) -> &'static str {
        match self {
            Privilege::HostVolume => "mount host volumes",
            Privilege::MemoryVolume => "mount in-memory volumes",
            Privilege::HostPort => "map to a host port",
            Privilege::Devices => "mount devices",
            Privilege::Privileged => "enable privileged mode",
            Privilege::Dns => "configure dns",
            Privilege::DnsSearch => "configure dns_search",
            Privilege::ExtraHosts => "configure extra_hosts",
            Privilege::NetworkMode => "configure network_mode",
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

/// A trust-gated rule: when `violated` holds for an untrusted repository,
/// linting fails with [`LintError::Untrusted`].
pub struct PrivilegeRule<T> {
    pub privilege: Privilege,
    pub violated: fn(&T) -> bool,
}

/// Applies `rules` in order and returns the first violation, or `Ok(())`
/// when `trusted` is set.
pub(crate) fn check_privileges<T>(
    target: &T,
    rules: &[PrivilegeRule<T>],
    trusted: bool,
) -> Result<(), LintError> {
    if trusted {
        return Ok(());
    }
    match rules.iter().find(|rule| (rule.violated)(target)) {
        Some(rule) => Err(LintError::Untrusted(rule.privilege)),
        None => Ok(()),
    }
}

/// Lints a single resource.
///
/// Pipelines are checked with [`lint_pipeline`]. Secrets and signatures
/// carry no containers and always pass.
///
/// # Errors
///
/// Returns the first violated rule as a [`LintError`].
pub fn lint(resource: &Resource, trusted: bool) -> Result<(), LintError> {
    match resource {
        Resource::Pipeline(pipeline) => lint_pipeline(pipeline, trusted),
        Resource::Secret(_) | Resource::Signature(_) => Ok(()),
    }
}

/// Runs the platform check followed by the resource check.
///
/// # Errors
///
/// Returns the first violated rule as a [`LintError`].
pub fn lint_pipeline(pipeline: &Pipeline, trusted: bool) -> Result<(), LintError> {
    log::debug!(
        "linting pipeline '{}' (trusted: {trusted})",
        pipeline.name
    );

    let result = check_platform(pipeline).and_then(|()| check_resource(pipeline, trusted));
    if let Err(ref err) = result {
        log::debug!("pipeline '{}' rejected: {err}", pipeline.name);
    }
    result
}
