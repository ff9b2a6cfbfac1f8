//! # Header Control Word
//!
//! The first 16-bit little-endian word of every header packs three fields:
//!
//! ```text
//!  15      12 11       8 7                 0
//! +----------+----------+-------------------+
//! | VERSION  |  FLAGS   |     RESERVED      |
//! +----------+----------+-------------------+
//! ```
//!
//! `FLAGS` bit 0 (0x0100 in the word) marks a destination node id, bit 1
//! (0x0200) a source node id. The remaining two flag bits and the reserved
//! byte are carried through on decode without validation and always written
//! as zero.

use serde::{Deserialize, Serialize};

const VERSION_SHIFT: u16 = 12;
const VERSION_MASK: u16 = 0xF000;
const FLAGS_SHIFT: u16 = 8;
const FLAGS_MASK: u16 = 0x0F00;
const RESERVED_MASK: u16 = 0x00FF;

/// Flag nibble bit: destination node id follows
const FLAG_DESTINATION_NODE_ID: u8 = 0x01;
/// Flag nibble bit: source node id follows
const FLAG_SOURCE_NODE_ID: u8 = 0x02;
const KNOWN_FLAGS: u8 = FLAG_DESTINATION_NODE_ID | FLAG_SOURCE_NODE_ID;

/// Decoded view of the header control word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderFlags {
    /// 4-bit protocol version
    pub version: u8,
    pub source_node_id_present: bool,
    pub destination_node_id_present: bool,
    /// Flag bits this codec does not understand (kept for diagnostics only)
    pub unknown_flags: u8,
    /// Reserved byte as received
    pub reserved: u8,
}

impl HeaderFlags {
    /// Flags for an outgoing header. Unknown and reserved bits are always zero.
    pub fn new(version: u8, source_present: bool, destination_present: bool) -> Self {
        Self {
            version: version & 0x0F,
            source_node_id_present: source_present,
            destination_node_id_present: destination_present,
            unknown_flags: 0,
            reserved: 0,
        }
    }

    /// Split a raw control word into its named fields
    pub fn from_word(word: u16) -> Self {
        let flags = ((word & FLAGS_MASK) >> FLAGS_SHIFT) as u8;
        Self {
            version: ((word & VERSION_MASK) >> VERSION_SHIFT) as u8,
            source_node_id_present: flags & FLAG_SOURCE_NODE_ID != 0,
            destination_node_id_present: flags & FLAG_DESTINATION_NODE_ID != 0,
            unknown_flags: flags & !KNOWN_FLAGS,
            reserved: (word & RESERVED_MASK) as u8,
        }
    }

    /// Pack the named fields back into a control word
    pub fn to_word(self) -> u16 {
        let mut flags = self.unknown_flags & !KNOWN_FLAGS;
        if self.source_node_id_present {
            flags |= FLAG_SOURCE_NODE_ID;
        }
        if self.destination_node_id_present {
            flags |= FLAG_DESTINATION_NODE_ID;
        }

        (u16::from(self.version & 0x0F) << VERSION_SHIFT)
            | ((u16::from(flags) << FLAGS_SHIFT) & FLAGS_MASK)
            | u16::from(self.reserved)
    }
}
