//! Integration tests for configuration loading and validation

#![allow(clippy::expect_used)]

use message_header::config::{
    CodecConfig, FramingConfig, LoggingConfig, MAX_PAYLOAD_SIZE, PAYLOAD_SIZE_CEILING,
};
use message_header::{MessageCodec, ProtocolError};
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = CodecConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
}

#[test]
fn test_zero_max_payload_size() {
    let mut config = CodecConfig::default();
    config.framing.max_payload_size = 0;

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Max payload size must be greater than 0")));
}

#[test]
fn test_excessive_max_payload_size() {
    let mut config = CodecConfig::default();
    config.framing.max_payload_size = PAYLOAD_SIZE_CEILING + 1;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("Max payload size too large")));
}

#[test]
fn test_payload_ceiling_is_valid() {
    let framing = FramingConfig {
        max_payload_size: PAYLOAD_SIZE_CEILING,
    };
    assert!(framing.validate().is_empty());
}

#[test]
fn test_empty_app_name() {
    let mut config = CodecConfig::default();
    config.logging.app_name = String::new();

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_long_app_name() {
    let mut config = CodecConfig::default();
    config.logging.app_name = "x".repeat(65);

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Application name too long")));
}

#[test]
fn test_validate_strict_with_valid_config() {
    let config = CodecConfig::default();
    assert!(config.validate_strict().is_ok());
}

#[test]
fn test_validate_strict_with_invalid_config() {
    let config = CodecConfig::default_with_overrides(|c| {
        c.framing.max_payload_size = 0;
        c.logging.app_name = String::new();
    });

    match config.validate_strict() {
        Err(ProtocolError::ConfigError(msg)) => {
            assert!(msg.contains("Configuration validation failed"));
            assert!(msg.contains("Max payload size"));
            assert!(msg.contains("Application name"));
        }
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_from_toml_partial_sections() {
    let config = CodecConfig::from_toml(
        r#"
        [framing]
        max_payload_size = 512
        "#,
    )
    .expect("valid toml");

    assert_eq!(config.framing.max_payload_size, 512);
    assert_eq!(config.logging.app_name, LoggingConfig::default().app_name);
    assert_eq!(MessageCodec::new(&config.framing).max_payload_size(), 512);
}

#[test]
fn test_from_toml_log_level() {
    let config = CodecConfig::from_toml(
        r#"
        [logging]
        app_name = "sensor-node"
        log_level = "debug"
        json_format = true
        "#,
    )
    .expect("valid toml");

    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert!(config.logging.json_format);
    assert_eq!(config.framing.max_payload_size, MAX_PAYLOAD_SIZE);
}

#[test]
fn test_from_toml_bad_log_level() {
    let result = CodecConfig::from_toml(
        r#"
        [logging]
        app_name = "x"
        log_level = "loud"
        json_format = false
        "#,
    );
    assert!(matches!(result, Err(ProtocolError::ConfigError(_))));
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("codec.toml");

    let config = CodecConfig::default_with_overrides(|c| {
        c.framing.max_payload_size = 900;
        c.logging.log_level = Level::WARN;
    });
    config.save_to_file(&path).expect("save");

    let loaded = CodecConfig::from_file(&path).expect("load");
    assert_eq!(loaded.framing.max_payload_size, 900);
    assert_eq!(loaded.logging.log_level, Level::WARN);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = CodecConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ProtocolError::ConfigError(_))));
}

#[test]
fn test_from_env_overrides() {
    std::env::set_var("MESSAGE_HEADER_MAX_PAYLOAD_SIZE", "777");
    std::env::set_var("MESSAGE_HEADER_LOG_LEVEL", "trace");
    let config = CodecConfig::from_env().expect("env config");
    std::env::remove_var("MESSAGE_HEADER_MAX_PAYLOAD_SIZE");
    std::env::remove_var("MESSAGE_HEADER_LOG_LEVEL");

    assert_eq!(config.framing.max_payload_size, 777);
    assert_eq!(config.logging.log_level, Level::TRACE);
}
