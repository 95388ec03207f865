//! Remote API Errors

use thiserror::Error;

/// Failure talking to the clinic backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response arrived with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Body was not JSON, or records did not match the entity shape
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Draft could not be turned into a request body
    #[error("Could not encode request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
