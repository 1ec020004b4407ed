//! Client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Exchange returned HTTP {status}: {message}")]
    Exchange { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
