//! # Configuration Management
//!
//! Protocol constants and runtime configuration for the header codec.
//!
//! The header layout itself is fixed; what can be tuned is the framing
//! layer (largest payload accepted alongside a header) and logging.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()`

use crate::error::constants::{
    ERR_CONFIG_OPEN, ERR_CONFIG_PARSE, ERR_CONFIG_READ, ERR_CONFIG_SERIALIZE, ERR_CONFIG_WRITE,
};
use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// The only header version this codec accepts and emits
pub const HEADER_VERSION: u8 = 1;

/// Size of the always-present part of a header: control word + message id
pub const FIXED_HEADER_SIZE: usize = 6;

/// Size of an optional node id field
pub const NODE_ID_SIZE: usize = 8;

/// Largest possible encoded header (both node ids present)
pub const MAX_HEADER_SIZE: usize = FIXED_HEADER_SIZE + 2 * NODE_ID_SIZE;

/// Default payload limit: what fits next to a full header in a
/// minimum-MTU IPv6 datagram
pub const MAX_PAYLOAD_SIZE: usize = 1280 - MAX_HEADER_SIZE;

/// Upper bound for a configured payload limit (UDP datagram ceiling)
pub const PAYLOAD_SIZE_CEILING: usize = u16::MAX as usize - MAX_HEADER_SIZE;

/// Top-level codec configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Message framing configuration
    #[serde(default)]
    pub framing: FramingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_OPEN}: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_READ}: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_PARSE}: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(size) = std::env::var("MESSAGE_HEADER_MAX_PAYLOAD_SIZE") {
            config.framing.max_payload_size = size.parse::<usize>().map_err(|e| {
                ProtocolError::ConfigError(format!(
                    "Invalid MESSAGE_HEADER_MAX_PAYLOAD_SIZE '{size}': {e}"
                ))
            })?;
        }

        if let Ok(level) = std::env::var("MESSAGE_HEADER_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                ProtocolError::ConfigError(format!("Invalid MESSAGE_HEADER_LOG_LEVEL '{level}'"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_SERIALIZE}: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_WRITE}: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.framing.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Framing configuration for header + payload messages
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FramingConfig {
    /// Largest payload accepted after a header, in bytes
    pub max_payload_size: usize,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD_SIZE,
        }
    }
}

impl FramingConfig {
    /// Validate framing configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_payload_size == 0 {
            errors.push("Max payload size must be greater than 0".to_string());
        } else if self.max_payload_size > PAYLOAD_SIZE_CEILING {
            errors.push(format!(
                "Max payload size too large: {} bytes (maximum: {PAYLOAD_SIZE_CEILING})",
                self.max_payload_size
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("message-header"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
