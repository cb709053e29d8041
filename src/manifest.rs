//! Manifest loading.
//!
//! A manifest is a YAML file holding one or more `---` separated documents,
//! each deserialized into a [`Resource`]. Shape errors (a scalar where a
//! sequence is expected, an unknown `kind`, …) are reported here so the
//! [`linter`](crate::linter) only ever sees well-typed input.
//!
//! ```
//! use pipeline_lint::manifest;
//!
//! let manifest = manifest::parse_str("kind: pipeline\nsteps:\n- name: build\n  image: golang\n")
//!     .unwrap();
//! assert_eq!(manifest.resources.len(), 1);
//! ```

use crate::resource::Resource;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The resources parsed from a single YAML file, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("yaml: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("yaml: document {index}: {source}")]
    Document {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("yaml: document {index}: missing kind")]
    MissingKind { index: usize },
}

/// Parses every document in `content`.
///
/// Empty documents (for example a trailing `---`) are skipped and YAML
/// merge keys (`<<: *anchor`) are resolved before deserialization.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed YAML and
/// [`ParseError::Document`] / [`ParseError::MissingKind`] when a document
/// does not describe a known resource.
pub fn parse_str(content: &str) -> Result<Manifest, ParseError> {
    let mut resources = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let mut value = serde_yaml::Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }
        if value.get("kind").is_none() {
            return Err(ParseError::MissingKind { index });
        }
        // serde_yaml keeps `<<` as a plain key unless merges are applied.
        value
            .apply_merge()
            .map_err(|source| ParseError::Document { index, source })?;

        let resource = serde_yaml::from_value::<Resource>(value)
            .map_err(|source| ParseError::Document { index, source })?;
        resources.push(resource);
    }

    Ok(Manifest { resources })
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns [`ParseError::Io`] when the file cannot be read, otherwise the
/// errors of [`parse_str`].
pub fn parse_file(path: &Path) -> Result<Manifest, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}

impl Manifest {
    /// Iterates over the pipeline resources only.
    pub fn pipelines(&self) -> impl Iterator<Item = &crate::resource::Pipeline> {
        self.resources.iter().filter_map(|r| match r {
            Resource::Pipeline(p) => Some(p),
            _ => None,
        })
    }
}
