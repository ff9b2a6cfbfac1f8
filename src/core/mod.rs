//! # Core Header Components
//!
//! Wire primitives, the header control word, the header codec itself, and a
//! datagram framing codec built on top of it.
//!
//! ## Components
//! - **Wire**: bounds-checked little-endian integer reads and writes
//! - **Flags**: named view of the version / flags / reserved control word
//! - **Header**: `MessageHeader` and its encode / decode / size operations
//! - **Codec**: Tokio codec pairing a header with a datagram payload
//!
//! ## Wire Format
//! ```text
//! [Control(2)] [MessageId(4)] [SourceNodeId(8)?] [DestinationNodeId(8)?]
//! ```
//!
//! ## Safety
//! - Length is checked before every read; malformed input yields an error
//! - Encode never writes past, or partially into, an undersized buffer

pub mod codec;
pub mod flags;
pub mod header;
pub mod wire;
