//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The console sink lives in `ui::console` since it depends on terminal styling.

mod json;

pub use json::JsonEventSink;
