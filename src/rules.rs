//! Rule registry.
//!
//! Metadata for every diagnostic the crate can produce, used by the
//! `list-rules` and `explain` commands and by the SARIF renderer. The
//! identifiers match [`LintError::rule_id`](crate::linter::LintError::rule_id).

use crate::linter::Privilege;

/// Identifier reported for files that could not be loaded.
pub const PARSE_ERROR_RULE: &str = "yaml/parse-error";

/// Metadata for a single lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"trust/privileged"`).
    pub id: &'static str,
    /// Rule family: `yaml`, `platform`, `build`, `volume`, `step`, `container`, `trust`.
    pub category: &'static str,
    /// `true` if the rule only fires for untrusted repositories.
    pub trusted_only: bool,
    /// The diagnostic produced on violation.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Returns every rule in evaluation order.
pub fn all_rules() -> Vec<RuleInfo> {
    let mut rules = vec![
        RuleInfo {
            id: PARSE_ERROR_RULE,
            category: "yaml",
            trusted_only: false,
            message: "yaml: <parser error>",
            remediation: "Fix the YAML syntax and make sure every document declares a known `kind` (pipeline, secret, signature).",
        },
        RuleInfo {
            id: "platform/unsupported-os",
            category: "platform",
            trusted_only: false,
            message: "linter: unsupported os: <os>",
            remediation: "Set platform.os to `linux` or `windows`, or omit it to use the default.",
        },
        RuleInfo {
            id: "platform/unsupported-arch",
            category: "platform",
            trusted_only: false,
            message: "linter: unsupported architecture: <arch>",
            remediation: "Set platform.arch to `amd64`, `arm` or `arm64`, or omit it to use the default.",
        },
        RuleInfo {
            id: "build/missing-image",
            category: "build",
            trusted_only: false,
            message: "linter: invalid or missing build image",
            remediation: "Give the build section an `image` to tag the built image with.",
        },
        RuleInfo {
            id: "volume/reserved-name",
            category: "volume",
            trusted_only: false,
            message: "linter: invalid volume name: <name>",
            remediation: "Rename the volume; `_workspace` and `_docker_socket` are used by the runtime.",
        },
        RuleInfo {
            id: "step/duplicate-name",
            category: "step",
            trusted_only: false,
            message: "linter: duplicate step names",
            remediation: "Give every step and service a unique name; steps and services share one namespace.",
        },
        RuleInfo {
            id: "container/missing-name",
            category: "container",
            trusted_only: false,
            message: "linter: invalid or missing name",
            remediation: "Add a non-empty `name` to every step and service.",
        },
        RuleInfo {
            id: "container/missing-image",
            category: "container",
            trusted_only: false,
            message: "linter: invalid or missing image",
            remediation: "Add a non-empty `image` to every step and service.",
        },
    ];

    rules.extend(Privilege::ALL.iter().map(|&p| privilege_rule(p)));
    rules
}

fn privilege_rule(privilege: Privilege) -> RuleInfo {
    let (message, remediation) = match privilege {
        Privilege::HostVolume => (
            "linter: untrusted repositories cannot mount host volumes",
            "Replace the `host` volume with a `temp` volume, or mark the repository as trusted.",
        ),
        Privilege::MemoryVolume => (
            "linter: untrusted repositories cannot mount in-memory volumes",
            "Drop `medium: memory` from the `temp` volume, or mark the repository as trusted.",
        ),
        Privilege::HostPort => (
            "linter: untrusted repositories cannot map to a host port",
            "Remove the `host` key from the port mapping; services are reachable by name from other steps.",
        ),
        Privilege::Devices => (
            "linter: untrusted repositories cannot mount devices",
            "Remove `devices`, or mark the repository as trusted.",
        ),
        Privilege::Privileged => (
            "linter: untrusted repositories cannot enable privileged mode",
            "Remove `privileged: true`, or mark the repository as trusted.",
        ),
        Privilege::Dns => (
            "linter: untrusted repositories cannot configure dns",
            "Remove `dns`, or mark the repository as trusted.",
        ),
        Privilege::DnsSearch => (
            "linter: untrusted repositories cannot configure dns_search",
            "Remove `dns_search`, or mark the repository as trusted.",
        ),
        Privilege::ExtraHosts => (
            "linter: untrusted repositories cannot configure extra_hosts",
            "Remove `extra_hosts`, or mark the repository as trusted.",
        ),
        Privilege::NetworkMode => (
            "linter: untrusted repositories cannot configure network_mode",
            "Remove `network_mode`, or mark the repository as trusted.",
        ),
    };

    RuleInfo {
        id: privilege.rule_id(),
        category: "trust",
        trusted_only: true,
        message,
        remediation,
    }
}

/// Looks up a rule by identifier.
pub fn find_rule(id: &str) -> Option<RuleInfo> {
    all_rules().into_iter().find(|r| r.id == id)
}
