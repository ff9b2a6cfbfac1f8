//! # Message Header
//!
//! The header prefixed to every protocol message, and its codec.
//!
//! ## Wire Format (little endian)
//! ```text
//!  16 bit: | VERSION: 4 bit | FLAGS: 4 bit | RESERVED: 8 bit |
//!  32 bit: | MESSAGE_ID                                      |
//!  64 bit: | SOURCE_NODE_ID (iff source flag is set)         |
//!  64 bit: | DEST_NODE_ID (iff destination flag is set)      |
//! ```
//!
//! Encoded length is 6, 14 or 22 bytes depending on which node ids are
//! present. Decoding checks the remaining length before every read, so any
//! byte string can be handed to [`MessageHeader::decode`] safely.
//!
//! ## Usage
//! ```rust
//! use message_header::MessageHeader;
//!
//! let header = MessageHeader::new()
//!     .with_message_id(0x1122_3344)
//!     .with_source_node_id(7);
//!
//! let mut buf = [0u8; 32];
//! let written = header.encode(&mut buf)?;
//! assert_eq!(written, header.encoded_size());
//!
//! let (decoded, used) = MessageHeader::decode(&buf[..written])?;
//! assert_eq!(decoded, header);
//! assert_eq!(used, written);
//! # Ok::<(), message_header::error::ProtocolError>(())
//! ```

use crate::config::{FIXED_HEADER_SIZE, HEADER_VERSION, NODE_ID_SIZE};
use crate::core::flags::HeaderFlags;
use crate::core::wire::{WireReader, WireWriter};
use crate::error::{ProtocolError, Result};
use bytes::BufMut;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// In-memory form of a message header.
///
/// The version is not stored: encode always writes [`HEADER_VERSION`] and
/// decode refuses anything else. Node ids are genuinely optional; zero is a
/// valid node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MessageHeader {
    message_id: u32,
    source_node_id: Option<u64>,
    destination_node_id: Option<u64>,
}

impl MessageHeader {
    /// Header with message id 0 and no node ids
    pub const fn new() -> Self {
        Self {
            message_id: 0,
            source_node_id: None,
            destination_node_id: None,
        }
    }

    pub fn message_id(&self) -> u32 {
        self.message_id
    }

    pub fn source_node_id(&self) -> Option<u64> {
        self.source_node_id
    }

    pub fn destination_node_id(&self) -> Option<u64> {
        self.destination_node_id
    }

    #[must_use]
    pub fn with_message_id(mut self, id: u32) -> Self {
        self.message_id = id;
        self
    }

    #[must_use]
    pub fn with_source_node_id(mut self, id: u64) -> Self {
        self.source_node_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_destination_node_id(mut self, id: u64) -> Self {
        self.destination_node_id = Some(id);
        self
    }

    #[must_use]
    pub fn clear_source_node_id(mut self) -> Self {
        self.source_node_id = None;
        self
    }

    #[must_use]
    pub fn clear_destination_node_id(mut self) -> Self {
        self.destination_node_id = None;
        self
    }

    /// Control word flags this header encodes to
    pub fn flags(&self) -> HeaderFlags {
        HeaderFlags::new(
            HEADER_VERSION,
            self.source_node_id.is_some(),
            self.destination_node_id.is_some(),
        )
    }

    /// Exact number of bytes [`encode`](Self::encode) will write
    pub fn encoded_size(&self) -> usize {
        let mut size = FIXED_HEADER_SIZE;
        if self.source_node_id.is_some() {
            size += NODE_ID_SIZE;
        }
        if self.destination_node_id.is_some() {
            size += NODE_ID_SIZE;
        }
        size
    }

    /// Decode a header from the front of `buf`.
    ///
    /// Returns the header and the number of bytes it occupied. Bytes after
    /// the header are left for the caller (typically the payload).
    pub fn decode(buf: &[u8]) -> Result<(Self, usize)> {
        let mut reader = WireReader::new(buf);
        if let Err(e) = reader.require(FIXED_HEADER_SIZE) {
            debug!(available = buf.len(), "Header shorter than fixed part");
            return Err(e);
        }

        let flags = HeaderFlags::from_word(reader.read_u16_le()?);
        if flags.version != HEADER_VERSION {
            debug!(
                expected = HEADER_VERSION,
                found = flags.version,
                "Header version mismatch"
            );
            return Err(ProtocolError::VersionMismatch {
                expected: HEADER_VERSION,
                found: flags.version,
            });
        }

        let message_id = reader.read_u32_le()?;

        let source_node_id = if flags.source_node_id_present {
            Some(Self::read_node_id(&mut reader, "source")?)
        } else {
            None
        };

        let destination_node_id = if flags.destination_node_id_present {
            Some(Self::read_node_id(&mut reader, "destination")?)
        } else {
            None
        };

        let header = Self {
            message_id,
            source_node_id,
            destination_node_id,
        };
        let consumed = reader.consumed();
        debug_assert_eq!(consumed, header.encoded_size());

        trace!(message_id, consumed, "Decoded message header");
        Ok((header, consumed))
    }

    fn read_node_id(reader: &mut WireReader<'_>, which: &'static str) -> Result<u64> {
        reader.read_u64_le().map_err(|e| {
            debug!(
                field = which,
                available = reader.remaining(),
                "Node id flagged but truncated"
            );
            e
        })
    }

    /// Encode into the front of `buf`, returning the number of bytes written.
    ///
    /// Nothing is written if `buf` is smaller than
    /// [`encoded_size`](Self::encoded_size).
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize> {
        let needed = self.encoded_size();
        if buf.len() < needed {
            debug!(needed, available = buf.len(), "Output buffer too small for header");
            return Err(ProtocolError::insufficient(needed, buf.len()));
        }

        let mut writer = WireWriter::new(buf);
        writer.write_u16_le(self.flags().to_word())?;
        writer.write_u32_le(self.message_id)?;
        if let Some(id) = self.source_node_id {
            writer.write_u64_le(id)?;
        }
        if let Some(id) = self.destination_node_id {
            writer.write_u64_le(id)?;
        }

        let written = writer.written();
        trace!(message_id = self.message_id, written, "Encoded message header");
        Ok(written)
    }

    /// Encode into a freshly allocated, exactly sized vector
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_size());
        self.encode_to_buf(&mut out);
        out
    }

    /// Append the encoded header to a growable buffer
    pub fn encode_to_buf<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16_le(self.flags().to_word());
        buf.put_u32_le(self.message_id);
        if let Some(id) = self.source_node_id {
            buf.put_u64_le(id);
        }
        if let Some(id) = self.destination_node_id {
            buf.put_u64_le(id);
        }
    }
}
