use thiserror::Error;

use crate::client::error::{ApiError, StorageError, ValidationError};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed, please try again";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, please check your connection";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup Failed, Try Again";

/// Terminal outcome of a failed login or signup attempt.
///
/// Every variant ends the attempt; nothing is retried.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Rejected on the client before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// 400 or 401 from the backend.
    #[error("Invalid credentials (status {status})")]
    Credential {
        status: u16,
        message: Option<String>,
    },
    /// 404 from the backend.
    #[error("User not found")]
    NotFound { message: Option<String> },
    /// Any other non-2xx status.
    #[error("Request failed with status {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },
    /// The request never completed.
    #[error("Network error: {0}")]
    Network(String),
    /// A 2xx response that could not be understood, or a request that could not be built.
    #[error("Malformed exchange with the backend: {0}")]
    Malformed(String),
    /// A 2xx login response without a token.
    #[error("Backend response did not include a token")]
    MissingToken,
    /// The token could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Classifies a failed login request by status code.
    pub fn from_login_failure(err: ApiError) -> Self {
        match err {
            ApiError::Status {
                status: status @ (400 | 401),
                message,
            } => Self::Credential { status, message },
            ApiError::Status {
                status: 404,
                message,
            } => Self::NotFound { message },
            ApiError::Status { status, message } => Self::Server { status, message },
            ApiError::Network(reason) => Self::Network(reason),
            ApiError::Decode(reason) | ApiError::InvalidRequest(reason) => {
                Self::Malformed(reason)
            }
        }
    }

    /// Signup keeps the transport detail for logging only; every status is a server failure.
    pub fn from_signup_failure(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, message } => Self::Server { status, message },
            ApiError::Network(reason) => Self::Network(reason),
            ApiError::Decode(reason) | ApiError::InvalidRequest(reason) => {
                Self::Malformed(reason)
            }
        }
    }

    /// Toast text for a failed login. A backend supplied message wins over the defaults.
    pub fn login_message(&self) -> String {
        let (message, fallback) = match self {
            Self::Validation(err) => return err.to_string(),
            Self::Credential { message, .. } => (message, INVALID_CREDENTIALS_MESSAGE),
            Self::NotFound { message } => (message, USER_NOT_FOUND_MESSAGE),
            Self::Server { message, .. } => (message, LOGIN_FAILED_MESSAGE),
            Self::Network(_) => return NETWORK_ERROR_MESSAGE.to_string(),
            Self::Malformed(_) | Self::MissingToken | Self::Storage(_) => {
                return LOGIN_FAILED_MESSAGE.to_string()
            }
        };

        message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Toast text for a failed signup. Signup does not differentiate by status.
    pub fn signup_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            _ => SIGNUP_FAILED_MESSAGE.to_string(),
        }
    }
}
