//! Detector error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviationError {
    #[error("Ticker has no change samples; average is undefined")]
    EmptyChanges,

    #[error("Average of change samples is zero; deviation is undefined")]
    ZeroAverage,

    #[error("Decimal overflow while computing {0}")]
    Overflow(&'static str),
}

pub type DetectorResult<T> = Result<T, DeviationError>;
