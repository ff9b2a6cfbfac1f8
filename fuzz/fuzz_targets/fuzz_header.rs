#![no_main]

use libfuzzer_sys::fuzz_target;
use message_header::MessageHeader;

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary bytes - must never panic, and anything accepted must re-encode identically
    if let Ok((header, used)) = MessageHeader::decode(data) {
        assert_eq!(used, header.encoded_size());
        let mut buf = [0u8; 22];
        let written = header.encode(&mut buf).unwrap_or(0);
        assert_eq!(written, used);
        let (again, _) = MessageHeader::decode(&buf[..written]).unwrap_or_default();
        assert_eq!(again, header);
    }
});
