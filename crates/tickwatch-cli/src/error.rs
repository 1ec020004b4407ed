//! Application error types.

use tickwatch_client::ClientError;
use tickwatch_detector::DeviationError;
use tickwatch_telemetry::TelemetryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Deviation error: {0}")]
    Deviation(#[from] DeviationError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io(_) | AppError::Telemetry(_) => 1,
            AppError::Config(_) => 2,
            AppError::Client(err) => match err {
                ClientError::InvalidUrl(_) => 2,
                ClientError::HttpClient(_) | ClientError::Network(_) => 3,
                ClientError::Exchange { .. } => 4,
                ClientError::MalformedResponse(_) => 5,
            },
            AppError::Deviation(_) => 6,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
