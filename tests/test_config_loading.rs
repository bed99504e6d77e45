//! Configuration loading and validation tests
//!
//! Tests focus on behavior of loading files from disk, defaults and
//! validation errors.

use motto_classifier::config::{ClassifierConfig, ConfigError};
use motto_classifier::{ClassifierService, OversizeAction, TaskCategory};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_config_loads_successfully_from_valid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[classifier]
max_input_chars = 500
oversize = "reject"

[server]
host = "0.0.0.0"
port = 9000
"#
    )
    .unwrap();

    let config = ClassifierConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.classifier.max_input_chars, 500);
    assert_eq!(config.classifier.oversize, OversizeAction::Reject);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_config_applies_defaults_for_missing_sections() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[server]\nport = 7000").unwrap();

    let config = ClassifierConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.server.port, 7000);
    assert_eq!(config.classifier.max_input_chars, 10_000);
    assert_eq!(config.classifier.oversize, OversizeAction::Truncate);
}

#[test]
fn test_config_returns_error_for_missing_file() {
    let result = ClassifierConfig::load_from_file(Path::new("/nonexistent/motto.toml"));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_config_returns_error_for_malformed_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[server\nport = ").unwrap();

    let result = ClassifierConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_returns_error_for_wrong_types() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[server]\nport = \"eighty\"").unwrap();

    let result = ClassifierConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_rejects_empty_host() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[server]\nhost = \"  \"").unwrap();

    let result = ClassifierConfig::load_from_file(temp_file.path());
    match result {
        Err(ConfigError::InvalidConfig(message)) => assert!(message.contains("host")),
        other => panic!("Expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_loaded_policy_drives_service() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[classifier]\nmax_input_chars = 5\noversize = \"truncate\"").unwrap();

    let config = ClassifierConfig::load_from_file(temp_file.path()).unwrap();
    let service = ClassifierService::from_config(&config);

    // only "essay" survives truncation
    let result = service.classify("essay meeting agenda").unwrap();
    assert_eq!(result.category, TaskCategory::Essay);
}
