/*!
 * Tests for application configuration functionality
 */

use std::path::PathBuf;
use subvtt::app_config::{Config, LogLevel, SubtitleFormat};
use subvtt::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output_format, SubtitleFormat::Srt);
    assert_eq!(config.base_timestamp_ms, None);
    assert_eq!(config.output_suffix, None);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.no_ansi_color);
    assert!(!config.write_log_file);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.base_timestamp_ms = Some(-5);
    assert!(config.validate().is_ok());
    config.base_timestamp_ms = Some(i64::MIN);
    assert!(config.validate().is_ok());
    config.base_timestamp_ms = Some(0);
    assert!(config.validate().is_ok());

    config.output_suffix = Some("  ".to_string());
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "output_suffix", .. })
    ));
    config.output_suffix = Some("../en".to_string());
    assert!(config.validate().is_err());
    config.output_suffix = Some("en".to_string());
    assert!(config.validate().is_ok());
}

/// Test JSON serialization round trip of the config file format
#[test]
fn test_config_serialization_withCustomValues_shouldRoundTrip() {
    let config = Config {
        output_format: SubtitleFormat::Vtt,
        base_timestamp_ms: Some(10_000),
        output_suffix: Some("en".to_string()),
        log_level: LogLevel::Debug,
        no_ansi_color: true,
        write_log_file: true,
        log_dir: Some(PathBuf::from("logs")),
    };

    let json = serde_json::to_string_pretty(&config).unwrap();
    assert!(json.contains("\"output_format\": \"vtt\""));
    assert!(json.contains("\"log_level\": \"debug\""));

    let parsed = Config::from_json_str(&json).unwrap();
    assert_eq!(parsed, config);
}

/// Test that a missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let (config, created) = Config::load_or_create(&path).unwrap();
    assert!(created);
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let (reloaded, created_again) = Config::load_or_create(&path).unwrap();
    assert!(!created_again);
    assert_eq!(reloaded, config);
}

/// Test that a broken config file is reported
#[test]
fn test_loadOrCreate_withInvalidJson_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json").unwrap();

    let err = Config::load_or_create(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

/// Test log level mapping to the log facade
#[test]
fn test_logLevel_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
