//! Typed pipeline resources.
//!
//! These are the in-memory shapes of the documents found in a pipeline YAML
//! file. Every field defaults to its zero value so that absent keys never
//! need special handling in the [`linter`](crate::linter).
//!
//! ```yaml
//! kind: pipeline
//! name: default
//! platform:
//!   os: linux
//!   arch: amd64
//! steps:
//!   - name: build
//!     image: golang
//! ```

use std::collections::BTreeMap;

/// One document of a manifest, discriminated by its `kind` key.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resource {
    Pipeline(Pipeline),
    Secret(Secret),
    Signature(Signature),
}

impl Resource {
    /// The value of the document's `kind` key.
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Pipeline(_) => "pipeline",
            Resource::Secret(_) => "secret",
            Resource::Signature(_) => "signature",
        }
    }

    /// The resource's declared name, empty when unnamed.
    pub fn name(&self) -> &str {
        match self {
            Resource::Pipeline(p) => &p.name,
            Resource::Secret(s) => &s.name,
            Resource::Signature(_) => "",
        }
    }
}

/// A CI pipeline: target platform, shared volumes, services, and steps.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Pipeline {
    pub name: String,
    #[serde(rename = "type")]
    pub pipeline_type: String,
    pub platform: Platform,
    /// Image build template; `None` when the pipeline does not build an image.
    pub build: Option<Build>,
    pub volumes: Vec<Volume>,
    pub services: Vec<Container>,
    pub steps: Vec<Container>,
    pub depends_on: Vec<String>,
}

impl Pipeline {
    /// Services followed by steps, in declaration order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.services.iter().chain(self.steps.iter())
    }
}

/// Target operating system and architecture. Empty values mean the runner
/// defaults (`linux` / `amd64`).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Platform {
    pub os: String,
    pub arch: String,
    pub variant: String,
    pub version: String,
}

/// Image build template.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Build {
    pub image: String,
    pub context: String,
    pub dockerfile: String,
    pub args: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
    pub cache_from: Vec<String>,
}

/// A pipeline-level volume that steps and services may mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Volume {
    pub name: String,
    #[serde(rename = "host", skip_serializing_if = "Option::is_none")]
    pub host_path: Option<VolumeHostPath>,
    #[serde(rename = "temp", skip_serializing_if = "Option::is_none")]
    pub empty_dir: Option<VolumeEmptyDir>,
}

impl Volume {
    /// Returns `true` when the volume mounts a path from the host.
    pub fn is_host_path(&self) -> bool {
        self.host_path.is_some()
    }

    /// Returns `true` for an ephemeral volume backed by host memory.
    pub fn is_in_memory(&self) -> bool {
        self.empty_dir
            .as_ref()
            .is_some_and(|dir| dir.medium == VolumeEmptyDir::MEDIUM_MEMORY)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VolumeHostPath {
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VolumeEmptyDir {
    /// Storage medium; empty for disk, `memory` for a tmpfs.
    pub medium: String,
    pub size_limit: Option<u64>,
}

impl VolumeEmptyDir {
    pub const MEDIUM_MEMORY: &'static str = "memory";
}

/// A step or service.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Container {
    pub name: String,
    pub image: String,
    pub commands: Vec<String>,
    pub environment: BTreeMap<String, serde_yaml::Value>,
    pub detach: bool,
    pub privileged: bool,
    pub devices: Vec<VolumeDevice>,
    pub ports: Vec<Port>,
    pub dns: Vec<String>,
    pub dns_search: Vec<String>,
    pub extra_hosts: Vec<String>,
    pub network_mode: String,
    pub volumes: Vec<VolumeMount>,
    pub depends_on: Vec<String>,
}

/// A host device exposed to a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VolumeDevice {
    pub name: String,
    #[serde(alias = "device_path")]
    pub path: String,
}

/// A pipeline volume mounted into a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VolumeMount {
    pub name: String,
    #[serde(alias = "mount_path")]
    pub path: String,
}

/// A published container port.
///
/// Accepts both the short form (`- 80`) and the long form
/// (`- { port: 80, host: 8080 }`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Port {
    Number(u16),
    Mapping(PortMapping),
}

impl Port {
    /// The port inside the container.
    pub fn port(&self) -> u16 {
        match self {
            Port::Number(port) => *port,
            Port::Mapping(mapping) => mapping.port,
        }
    }

    /// The host port the container port is bound to, if any.
    pub fn host(&self) -> Option<u16> {
        match self {
            Port::Number(_) => None,
            Port::Mapping(mapping) => mapping.host,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct PortMapping {
    pub port: u16,
    #[serde(default)]
    pub host: Option<u16>,
    #[serde(default)]
    pub protocol: Option<String>,
}

/// An encrypted or externally sourced secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Secret {
    pub name: String,
    pub data: String,
}

/// HMAC signature over the rest of the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Signature {
    pub hmac: String,
}
