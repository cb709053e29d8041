use std::path::Path;

use pipeline_lint::config::{Config, ConfigError};

#[test]
fn defaults_are_untrusted_yaml_discovery() {
    let config = Config::default();
    assert!(!config.trust.enabled);
    assert_eq!(config.discovery.extensions, vec!["yml", "yaml"]);
    assert!(config.discovery.is_excluded("target"));
    assert!(!config.discovery.is_excluded("src"));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let config = Config::from_toml("[trust]\nenabled = true\n").unwrap();
    assert!(config.trust.enabled);
    assert_eq!(config.discovery.extensions, vec!["yml", "yaml"]);
}

#[test]
fn from_toml_normalizes_extensions() {
    let config = Config::from_toml("[discovery]\nextensions = [\".YML\"]\n").unwrap();
    assert_eq!(config.discovery.extensions, vec!["yml"]);
    assert!(config.discovery.matches(Path::new(".drone.yml")));
}

#[test]
fn load_normalizes_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pipeline-lint.toml");
    std::fs::write(&path, "[discovery]\nextensions = [\".YML\", \"yaml\"]\n").unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.discovery.extensions, vec!["yml", "yaml"]);
    assert!(config.discovery.matches(Path::new("ci/.drone.YML")));
    assert!(!config.discovery.matches(Path::new("README.md")));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = Config::load(Some(Path::new("does-not-exist.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[trust]\nenabled = \"maybe\"\n").unwrap();

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}
