//! Step and service rules.
//!
//! Structural checks (`name`, then `image`) always apply. The remaining
//! rules live in [`CONTAINER_PRIVILEGES`] and are evaluated in table order
//! for untrusted repositories only.

use super::{check_privileges, LintError, Privilege, PrivilegeRule};
use crate::resource::Container;

pub static CONTAINER_PRIVILEGES: &[PrivilegeRule<Container>] = &[
    PrivilegeRule {
        privilege: Privilege::HostPort,
        violated: binds_host_port,
    },
    PrivilegeRule {
        privilege: Privilege::Devices,
        violated: mounts_devices,
    },
    PrivilegeRule {
        privilege: Privilege::Privileged,
        violated: is_privileged,
    },
    PrivilegeRule {
        privilege: Privilege::Dns,
        violated: sets_dns,
    },
    PrivilegeRule {
        privilege: Privilege::DnsSearch,
        violated: sets_dns_search,
    },
    PrivilegeRule {
        privilege: Privilege::ExtraHosts,
        violated: sets_extra_hosts,
    },
    PrivilegeRule {
        privilege: Privilege::NetworkMode,
        violated: sets_network_mode,
    },
];

fn binds_host_port(container: &Container) -> bool {
    container.ports.iter().any(|port| port.host().is_some())
}

fn mounts_devices(container: &Container) -> bool {
    !container.devices.is_empty()
}

fn is_privileged(container: &Container) -> bool {
    container.privileged
}

fn sets_dns(container: &Container) -> bool {
    !container.dns.is_empty()
}

fn sets_dns_search(container: &Container) -> bool {
    !container.dns_search.is_empty()
}

fn sets_extra_hosts(container: &Container) -> bool {
    !container.extra_hosts.is_empty()
}

fn sets_network_mode(container: &Container) -> bool {
    !container.network_mode.is_empty()
}

/// Validates one step or service.
///
/// # Errors
///
/// [`LintError::MissingName`], [`LintError::MissingImage`], or the first
/// [`CONTAINER_PRIVILEGES`] violation when `trusted` is false.
pub fn check_container(container: &Container, trusted: bool) -> Result<(), LintError> {
    if container.name.is_empty() {
        return Err(LintError::MissingName);
    }
    if container.image.is_empty() {
        return Err(LintError::MissingImage);
    }
    check_privileges(container, CONTAINER_PRIVILEGES, trusted)
}
