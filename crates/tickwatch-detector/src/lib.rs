//! Price deviation detection for tickwatch.
//!
//! Computes how far the trailing average of a ticker's change samples sits
//! from the latest close, and emits a JSON alert when that signed
//! percentage exceeds a threshold.

pub mod alert;
pub mod detector;
pub mod deviation;
pub mod error;

pub use alert::{write_alert, AlertData, AlertLevel, DeviationAlert};
pub use detector::DeviationDetector;
pub use deviation::Deviation;
pub use error::{DeviationError, DetectorResult};
