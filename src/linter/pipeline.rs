//! Resource-level rules: build template, volumes, name uniqueness, and the
//! per-container checks.

use super::container::check_container;
use super::volume::check_volume;
use super::LintError;
use crate::resource::Pipeline;
use std::collections::HashSet;

/// Checks everything below the platform, first failure wins.
///
/// Order: build image, volumes (declared order), duplicate names across
/// services and steps, then services followed by steps.
///
/// # Errors
///
/// Returns the first violated rule as a [`LintError`].
pub fn check_resource(pipeline: &Pipeline, trusted: bool) -> Result<(), LintError> {
    if let Some(build) = &pipeline.build {
        if build.image.is_empty() {
            return Err(LintError::MissingBuildImage);
        }
    }

    for volume in &pipeline.volumes {
        check_volume(volume, trusted)?;
    }

    check_unique_names(pipeline)?;

    for container in pipeline.containers() {
        check_container(container, trusted)?;
    }
    Ok(())
}

/// Steps and services share one namespace.
fn check_unique_names(pipeline: &Pipeline) -> Result<(), LintError> {
    let mut seen = HashSet::new();
    for container in pipeline.steps.iter().chain(pipeline.services.iter()) {
        if !seen.insert(container.name.as_str()) {
            return Err(LintError::DuplicateStepName {
                name: container.name.clone(),
            });
        }
    }
    Ok(())
}
