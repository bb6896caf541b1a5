use thiserror::Error;

/// Failure of a single request to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status, optionally carrying `{message}`.
    #[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// No response was received (DNS, connection refused, CORS, aborted, ...).
    #[error("Failed to send request: {0}")]
    Network(String),
    /// A 2xx response whose body could not be decoded.
    #[error("Failed to parse response body: {0}")]
    Decode(String),
    /// The request could not be assembled before sending.
    #[error("Failed to build request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
