//! Target platform rule.

use super::LintError;
use crate::resource::Pipeline;

/// Operating systems a pipeline may target.
pub const SUPPORTED_OS: &[&str] = &["linux", "windows"];

/// CPU architectures a pipeline may target.
pub const SUPPORTED_ARCH: &[&str] = &["amd64", "arm", "arm64"];

/// Checks `platform.os` and `platform.arch`, in that order. Empty values
/// select the runner defaults and always pass.
///
/// # Errors
///
/// [`LintError::UnsupportedOs`] or [`LintError::UnsupportedArch`].
pub fn check_platform(pipeline: &Pipeline) -> Result<(), LintError> {
    let platform = &pipeline.platform;

    if !platform.os.is_empty() && !SUPPORTED_OS.contains(&platform.os.as_str()) {
        return Err(LintError::UnsupportedOs(platform.os.clone()));
    }
    if !platform.arch.is_empty() && !SUPPORTED_ARCH.contains(&platform.arch.as_str()) {
        return Err(LintError::UnsupportedArch(platform.arch.clone()));
    }
    Ok(())
}
