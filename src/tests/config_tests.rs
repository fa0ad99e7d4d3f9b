//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    global_config, init_global_config, ConfigLoader, LoaderConfig, LogConfig, MaukaTrieConfig,
    Validate,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MaukaTrieConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.trie.case_sensitive);
    assert_eq!(config.loader.wildcard, '?');
}

/// Test that configuration validation catches invalid values in every section.
#[test]
fn test_config_validation() {
    let mut config = MaukaTrieConfig::default();

    config.trie.queue_capacity = 0;
    assert!(config.validate().is_err());

    config.trie.queue_capacity = 8;
    config.loader.comment_prefix.clear();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidSection {
            section: "loader",
            ..
        })
    ));

    config.loader = LoaderConfig::default();
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log = LogConfig::default();
    assert!(config.validate().is_ok());
}

#[test_case("trace", true)]
#[test_case("warn", true)]
#[test_case("WARN", false)]
#[test_case("", false)]
fn test_log_level_validation(level: &str, valid: bool) {
    let log = LogConfig {
        level: level.to_string(),
        ..Default::default()
    };
    assert_eq!(log.validate().is_ok(), valid);
}

/// Test loading configuration from a TOML file; missing keys keep their defaults.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [trie]
            case_sensitive = false
            pool_capacity = 4

            [loader]
            wildcard = "*"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_TRIE_FILE")
        .load()
        .unwrap();

    assert!(!config.trie.case_sensitive);
    assert_eq!(config.trie.pool_capacity, 4);
    assert_eq!(config.loader.wildcard, '*');

    // Other values should be defaults
    assert_eq!(config.trie.queue_capacity, 64);
    assert_eq!(config.loader.comment_prefix, "#");
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{ "log": { "level": "debug", "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_TRIE_JSON")
        .load()
        .unwrap();
    assert_eq!(config.log.level, "debug");
    assert!(config.log.json);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_env_test.toml", "[trie]\npool_capacity = 4\n")
        .unwrap();

    fixture.set_env("TEST_TRIE_ENV__TRIE__POOL_CAPACITY", "32");
    fixture.set_env("TEST_TRIE_ENV__TRIE__CASE_SENSITIVE", "false");

    let config = ConfigLoader::new(Some(&config_path), "TEST_TRIE_ENV")
        .load()
        .unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.trie.pool_capacity, 32);
    assert!(!config.trie.case_sensitive);
}

/// Test that an invalid value in the file fails validation after loading.
#[test]
fn test_load_config_fails_validation() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid_value.toml", "[trie]\nqueue_capacity = 0\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&config_path), "TEST_TRIE_RANGE").load();
    assert!(matches!(
        result,
        Err(ConfigError::ValueOutOfRange {
            key: "trie.queue_capacity",
            ..
        })
    ));
}

/// Test that loading a malformed configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[trie\ncase_sensitive = maybe\"\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&config_path), "TEST_TRIE_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ParseError { origin, .. }) if origin.contains("invalid.toml")));
}

#[test]
fn test_missing_and_unsupported_files() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("absent.toml");
    let result = ConfigLoader::new(Some(&missing), "TEST_TRIE_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(path)) if path == missing));

    let ini = fixture.create_file("config.ini", "[trie]\n").unwrap();
    let result = ConfigLoader::new(Some(&ini), "TEST_TRIE_INI").load();
    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(path)) if path == ini));
}

/// Test that no file at all yields the defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<&str>, "TEST_TRIE_NONE").load().unwrap();
    assert_eq!(config, MaukaTrieConfig::default());
}

/// Test that the first installed configuration is the one handed out globally.
///
/// The global can only be set once per process, so this is the only test that
/// installs one.
#[test]
fn test_global_config_keeps_first_install() {
    let mut first = MaukaTrieConfig::default();
    first.trie.pool_capacity = 3;
    init_global_config(first.clone());

    let mut second = MaukaTrieConfig::default();
    second.trie.pool_capacity = 9;
    init_global_config(second);

    assert_eq!(*global_config(), first);
}
