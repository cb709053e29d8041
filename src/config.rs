//! Configuration loading.
//!
//! The default configuration file is `pipeline-lint.toml` in the current
//! working directory. Every section is optional:
//!
//! ```toml
//! [trust]
//! enabled = false
//!
//! [discovery]
//! extensions = ["yml", "yaml"]
//! exclude = ["target", "node_modules", ".git"]
//! ```
//!
//! ```rust,no_run
//! use pipeline_lint::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert!(!config.trust.enabled);
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pipeline-lint.toml";

/// Main configuration.
///
/// All fields carry defaults so the config file can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Whether linted repositories are trusted.
    pub trust: TrustConfig,
    /// Which files a directory walk picks up.
    pub discovery: DiscoveryConfig,
}

/// Trust settings.
///
/// When [`enabled`](TrustConfig::enabled) is `true`, trust-gated rules
/// (host volumes, privileged mode, custom DNS, …) are not enforced.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct TrustConfig {
    pub enabled: bool,
}

/// File discovery settings.
///
/// Extensions are normalized to lowercase without a leading dot at load
/// time via [`DiscoveryConfig::normalize`].
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// File extensions treated as pipeline manifests.
    pub extensions: Vec<String>,
    /// Directory names skipped while walking.
    pub exclude: Vec<String>,
}

impl DiscoveryConfig {
    pub fn normalize(&mut self) {
        for ext in &mut self.extensions {
            *ext = ext.trim_start_matches('.').to_lowercase();
        }
    }

    /// Returns `true` if `path` has one of the configured extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }

    /// Returns `true` if a directory with this name must not be descended into.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|e| e == dir_name)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            extensions: vec!["yml".to_string(), "yaml".to_string()],
            exclude: vec![
                "target".to_string(),
                "node_modules".to_string(),
                ".git".to_string(),
            ],
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when an explicit path is missing, or the
    /// file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(ConfigError::NotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        let Some(path) = config_path else {
            log::debug!("no config file found, using defaults");
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Config::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from TOML text without touching the filesystem.
    ///
    /// Discovery extensions come back normalized.
    ///
    /// # Errors
    ///
    /// Returns the TOML deserialization error.
    pub fn from_toml(content: &str) -> Result<Config, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.discovery.normalize();
        Ok(config)
    }
}
