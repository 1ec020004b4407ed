//! Structured logging for tickwatch.
//!
//! Logs go to stderr so that stdout carries only command output.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{init_logging, LogFormat, DEFAULT_FILTER};
