//! Codec Metrics
//!
//! Counters for header traffic and rejections, for callers that want to see
//! how much malformed input reaches them.
//!
//! The header codec itself never touches these; a `Metrics` value is owned
//! by the caller and handed to [`MessageCodec`](crate::core::codec::MessageCodec)
//! (usually behind an `Arc`). Uses relaxed atomic counters.

use crate::error::ProtocolError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Metrics collector for codec operations
#[derive(Debug)]
pub struct Metrics {
    /// Headers successfully encoded
    pub headers_encoded: AtomicU64,
    /// Headers successfully decoded
    pub headers_decoded: AtomicU64,
    /// Total bytes written (header + payload)
    pub bytes_encoded: AtomicU64,
    /// Total bytes consumed (header + payload)
    pub bytes_decoded: AtomicU64,
    /// Input or output too short
    pub insufficient_buffer_errors: AtomicU64,
    /// Wrong version nibble
    pub version_mismatch_errors: AtomicU64,
    /// Payload over the configured limit
    pub oversized_payload_errors: AtomicU64,
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            headers_encoded: AtomicU64::new(0),
            headers_decoded: AtomicU64::new(0),
            bytes_encoded: AtomicU64::new(0),
            bytes_decoded: AtomicU64::new(0),
            insufficient_buffer_errors: AtomicU64::new(0),
            version_mismatch_errors: AtomicU64::new(0),
            oversized_payload_errors: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a successful encode of `byte_count` bytes
    pub fn header_encoded(&self, byte_count: u64) {
        self.headers_encoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a successful decode of `byte_count` bytes
    pub fn header_decoded(&self, byte_count: u64) {
        self.headers_decoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_decoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Count an error against its category. Errors outside the codec's
    /// taxonomy (I/O, configuration) are ignored.
    pub fn record_error(&self, err: &ProtocolError) {
        let counter = match err {
            ProtocolError::InsufficientBuffer { .. } => &self.insufficient_buffer_errors,
            ProtocolError::VersionMismatch { .. } => &self.version_mismatch_errors,
            ProtocolError::OversizedPayload { .. } => &self.oversized_payload_errors,
            ProtocolError::Io(_) | ProtocolError::ConfigError(_) => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            headers_encoded: self.headers_encoded.load(Ordering::Relaxed),
            headers_decoded: self.headers_decoded.load(Ordering::Relaxed),
            bytes_encoded: self.bytes_encoded.load(Ordering::Relaxed),
            bytes_decoded: self.bytes_decoded.load(Ordering::Relaxed),
            insufficient_buffer_errors: self.insufficient_buffer_errors.load(Ordering::Relaxed),
            version_mismatch_errors: self.version_mismatch_errors.load(Ordering::Relaxed),
            oversized_payload_errors: self.oversized_payload_errors.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Zero every counter
    pub fn reset(&self) {
        for counter in [
            &self.headers_encoded,
            &self.headers_decoded,
            &self.bytes_encoded,
            &self.bytes_decoded,
            &self.insufficient_buffer_errors,
            &self.version_mismatch_errors,
            &self.oversized_payload_errors,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Log current metrics
    pub fn log_summary(&self) {
        let snapshot = self.snapshot();
        info!(
            headers_encoded = snapshot.headers_encoded,
            headers_decoded = snapshot.headers_decoded,
            bytes_encoded = snapshot.bytes_encoded,
            bytes_decoded = snapshot.bytes_decoded,
            insufficient_buffer_errors = snapshot.insufficient_buffer_errors,
            version_mismatch_errors = snapshot.version_mismatch_errors,
            oversized_payload_errors = snapshot.oversized_payload_errors,
            uptime_seconds = snapshot.uptime_seconds,
            "Header codec metrics snapshot"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub headers_encoded: u64,
    pub headers_decoded: u64,
    pub bytes_encoded: u64,
    pub bytes_decoded: u64,
    pub insufficient_buffer_errors: u64,
    pub version_mismatch_errors: u64,
    pub oversized_payload_errors: u64,
    pub uptime_seconds: u64,
}

impl MetricsSnapshot {
    /// Total rejected inputs across all categories
    pub fn total_errors(&self) -> u64 {
        self.insufficient_buffer_errors + self.version_mismatch_errors + self.oversized_payload_errors
    }
}
