//! # Message Framing Codec
//!
//! [`tokio_util::codec`] adapter that pairs a [`MessageHeader`] with its
//! payload. The header carries no length field, so a message is delimited by
//! the transport: one datagram in, one [`Message`] out. Use it with
//! `UdpFramed` or any other datagram-per-buffer transport.
//!
//! On decode the whole buffer is taken; the bytes after the header become the
//! payload without copying. A rejected buffer is left untouched so the
//! caller can log or discard it.

use crate::config::{FramingConfig, MAX_PAYLOAD_SIZE};
use crate::core::header::MessageHeader;
use crate::error::{ProtocolError, Result};
use crate::utils::metrics::Metrics;
use bytes::{Bytes, BytesMut};
use std::sync::Arc;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, instrument};

/// A header and the payload that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: MessageHeader,
    pub payload: Bytes,
}

impl Message {
    pub fn new(header: MessageHeader, payload: impl Into<Bytes>) -> Self {
        Self {
            header,
            payload: payload.into(),
        }
    }

    /// Total on-the-wire size
    pub fn encoded_len(&self) -> usize {
        self.header.encoded_size() + self.payload.len()
    }
}

/// Datagram framing codec for [`Message`]
#[derive(Debug, Clone)]
pub struct MessageCodec {
    max_payload_size: usize,
    metrics: Option<Arc<Metrics>>,
}

impl Default for MessageCodec {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD_SIZE,
            metrics: None,
        }
    }
}

impl MessageCodec {
    pub fn new(config: &FramingConfig) -> Self {
        Self {
            max_payload_size: config.max_payload_size,
            metrics: None,
        }
    }

    /// Count traffic and rejections in `metrics`
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn max_payload_size(&self) -> usize {
        self.max_payload_size
    }

    fn check_payload(&self, size: usize) -> Result<()> {
        if size > self.max_payload_size {
            return Err(ProtocolError::OversizedPayload {
                size,
                max: self.max_payload_size,
            });
        }
        Ok(())
    }

    fn record<T>(&self, result: &Result<T>, byte_count: usize, encoding: bool) {
        let Some(metrics) = &self.metrics else {
            return;
        };
        match result {
            Ok(_) if encoding => metrics.header_encoded(byte_count as u64),
            Ok(_) => metrics.header_decoded(byte_count as u64),
            Err(e) => metrics.record_error(e),
        }
    }

    fn decode_message(&self, src: &mut BytesMut) -> Result<Message> {
        let (header, header_len) = MessageHeader::decode(src)?;
        self.check_payload(src.len() - header_len)?;

        let mut frame = src.split().freeze();
        let payload = frame.split_off(header_len);
        Ok(Message { header, payload })
    }
}

impl Decoder for MessageCodec {
    type Item = Message;
    type Error = ProtocolError;

    #[instrument(skip(self, src), fields(len = src.len()), level = "trace")]
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>> {
        if src.is_empty() {
            return Ok(None);
        }

        let len = src.len();
        let result = self.decode_message(src);
        self.record(&result, len, false);

        match result {
            Ok(msg) => Ok(Some(msg)),
            Err(e) => {
                debug!(error = %e, "Rejected inbound message");
                Err(e)
            }
        }
    }
}

impl Encoder<Message> for MessageCodec {
    type Error = ProtocolError;

    #[instrument(skip(self, item, dst), fields(message_id = item.header.message_id()), level = "trace")]
    fn encode(&mut self, item: Message, dst: &mut BytesMut) -> Result<()> {
        let total = item.encoded_len();
        let result = self.check_payload(item.payload.len());
        self.record(&result, total, true);
        if let Err(e) = result {
            debug!(error = %e, "Refusing to encode message");
            return Err(e);
        }

        dst.reserve(total);
        item.header.encode_to_buf(dst);
        dst.extend_from_slice(&item.payload);
        Ok(())
    }
}
