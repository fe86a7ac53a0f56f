//! Event Sink Implementations
//!
//! Concrete implementations of StoreEventSink:
//! - JsonEventSink: NDJSON stream for scripting
//! - LogEventSink: debug lines through the `log` facade

mod json;
mod log;

pub use json::JsonEventSink;
pub use log::LogEventSink;
