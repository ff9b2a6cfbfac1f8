//! # message-header
//!
//! Codec for the compact header prefixed to every message of a
//! point-to-point device messaging protocol.
//!
//! A header is a 16-bit control word (4-bit version, 4 flag bits, 8 reserved
//! bits), a 32-bit message id, and up to two optional 64-bit node ids. All
//! fields are little endian. The encoded form is 6, 14 or 22 bytes long.
//!
//! ```rust
//! use message_header::MessageHeader;
//!
//! let header = MessageHeader::new().with_message_id(0x1122_3344);
//! assert_eq!(header.encode_to_vec(), [0x00, 0x10, 0x44, 0x33, 0x22, 0x11]);
//! ```
//!
//! Payload encryption, retransmission and sessions belong to the layers that
//! call this crate.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::codec::{Message, MessageCodec};
pub use crate::core::flags::HeaderFlags;
pub use crate::core::header::MessageHeader;
pub use crate::error::{ProtocolError, Result};
