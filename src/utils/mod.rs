//! # Utility Modules
//!
//! Supporting utilities around the codec.
//!
//! ## Components
//! - **Logging**: tracing subscriber setup from `LoggingConfig`
//! - **Metrics**: thread-safe counters for encoded, decoded and rejected headers

pub mod logging;
pub mod metrics;

pub use metrics::{Metrics, MetricsSnapshot};
