//! Pipeline volume rules.
//!
//! | Rule | Trust-gated | Diagnostic |
//! |------|-------------|------------|
//! | reserved name | no | `invalid volume name: <name>` |
//! | host path | yes | `untrusted repositories cannot mount host volumes` |
//! | in-memory temp dir | yes | `untrusted repositories cannot mount in-memory volumes` |

use super::{check_privileges, LintError, Privilege, PrivilegeRule};
use crate::resource::Volume;

/// Names the runtime uses for its own volumes.
pub const RESERVED_VOLUME_NAMES: &[&str] = &["_workspace", "_docker_socket"];

pub static VOLUME_PRIVILEGES: &[PrivilegeRule<Volume>] = &[
    PrivilegeRule {
        privilege: Privilege::HostVolume,
        violated: Volume::is_host_path,
    },
    PrivilegeRule {
        privilege: Privilege::MemoryVolume,
        violated: Volume::is_in_memory,
    },
];

/// Validates one pipeline volume.
///
/// # Errors
///
/// [`LintError::ReservedVolumeName`] regardless of trust, otherwise the
/// first [`VOLUME_PRIVILEGES`] violation when `trusted` is false.
pub fn check_volume(volume: &Volume, trusted: bool) -> Result<(), LintError> {
    if RESERVED_VOLUME_NAMES.contains(&volume.name.as_str()) {
        return Err(LintError::ReservedVolumeName(volume.name.clone()));
    }
    check_privileges(volume, VOLUME_PRIVILEGES, trusted)
}
