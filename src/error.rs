//! # Error Types
//!
//! Error handling for the message header codec.
//!
//! Every failure the codec can report is an ordinary, recoverable condition:
//! the caller discards whatever it was building and decides what to do with
//! the offending bytes. Nothing here is retried internally.
//!
//! ## Error Categories
//! - **Buffer Errors**: input too short for the fixed header or a flagged
//!   optional field, or an output buffer smaller than the encoded size
//! - **Version Errors**: the version nibble does not match the single
//!   supported version
//! - **Framing Errors**: payload larger than the configured maximum
//! - **Configuration Errors**: unreadable or invalid configuration
//!
//! ## Example Usage
//! ```rust
//! use message_header::error::ProtocolError;
//! use message_header::MessageHeader;
//! use tracing::{error, info};
//!
//! match MessageHeader::decode(&[0x00, 0x10, 0x01]) {
//!     Ok((header, used)) => info!(?header, used, "Decoded header"),
//!     Err(e @ ProtocolError::InsufficientBuffer { .. }) => error!(error = %e, "Short read"),
//!     Err(e) => error!(error = %e, "Rejected header"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Configuration errors
    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_READ: &str = "Failed to read config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_CONFIG_SERIALIZE: &str = "Failed to serialize config";
    pub const ERR_CONFIG_WRITE: &str = "Failed to write config file";

    /// Logging errors
    pub const ERR_LOGGER_INSTALLED: &str = "A global tracing subscriber is already installed";
}

// ProtocolError is the primary error type for all codec operations
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("Insufficient buffer: need {needed} bytes, have {available}")]
    InsufficientBuffer { needed: usize, available: usize },

    #[error("Header version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u8, found: u8 },

    #[error("Payload too large: {size} bytes (max {max})")]
    OversizedPayload { size: usize, max: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ProtocolError {
    /// Shorthand used by the wire primitives before every read and write
    pub(crate) fn insufficient(needed: usize, available: usize) -> Self {
        ProtocolError::InsufficientBuffer { needed, available }
    }
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
