//! Integration tests for the serde representation of headers
//!
//! Headers and flags derive `Serialize`/`Deserialize` so they can be logged
//! and inspected as structured data; the wire format is the codec's job.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use message_header::{HeaderFlags, MessageHeader};

#[test]
fn test_header_json_roundtrip() {
    let header = MessageHeader::new()
        .with_message_id(42)
        .with_source_node_id(0)
        .with_destination_node_id(u64::MAX);

    let json = serde_json::to_string(&header).expect("Failed to serialize");
    assert!(json.contains("\"message_id\":42"));
    assert!(json.contains("\"source_node_id\":0"));

    let recovered: MessageHeader = serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(recovered, header);
}

#[test]
fn test_absent_node_id_is_null() {
    let header = MessageHeader::new().with_message_id(1);
    let json = serde_json::to_value(header).expect("Failed to serialize");

    assert!(json["source_node_id"].is_null());
    assert!(json["destination_node_id"].is_null());
}

#[test]
fn test_flags_from_decoded_word_serialize() {
    let flags = HeaderFlags::from_word(0x1300);
    let json = serde_json::to_value(flags).expect("Failed to serialize");

    assert_eq!(json["version"], 1);
    assert_eq!(json["source_node_id_present"], true);
    assert_eq!(json["destination_node_id_present"], true);
    assert_eq!(json["reserved"], 0);
}

#[test]
fn test_header_flags_match_presence() {
    let header = MessageHeader::new().with_destination_node_id(5);
    let flags = header.flags();

    assert!(!flags.source_node_id_present);
    assert!(flags.destination_node_id_present);
    assert_eq!(flags.to_word(), 0x1100);
}
