use axum::http::StatusCode;
use thiserror::Error;

/// Request-level failures surfaced through the response envelope.
///
/// Validation variants carry the exact wire strings the endpoint has always
/// returned; `Internal` hides its source behind a fixed message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request format")]
    InvalidFormat,

    #[error("Invalid Fibonacci Input")]
    InvalidFibonacciInput,

    #[error("Invalid Prime Input")]
    InvalidPrimeInput,

    #[error("Invalid LCM Input")]
    InvalidLcmInput,

    #[error("Invalid HCF Input")]
    InvalidHcfInput,

    #[error("Invalid AI Input")]
    InvalidAiInput,

    #[error("Unsupported Key")]
    UnsupportedKey,

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) | ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(anyhow::Error::new(err))
    }
}
