//! Error types for tickwatch-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid decimal {value:?}: {source}")]
    DecimalParse {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("Invalid trading pair: {0}")]
    InvalidTradingPair(String),
}

/// Result type alias for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
