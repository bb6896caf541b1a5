//! Error types for the LearnHub client.
//!
//! Errors are split by layer: `ApiError` for the HTTP transport, `StorageError` for token
//! persistence, `ConfigError` for startup configuration, and `AuthError` as the taxonomy the
//! login and signup flows turn into user facing notifications. None of them leave a submit
//! handler; each attempt ends with a toast.

pub mod api;
pub mod auth;
pub mod config;
pub mod storage;
pub mod validation;

pub use api::ApiError;
pub use auth::AuthError;
pub use config::ConfigError;
pub use storage::StorageError;
pub use validation::{FormField, ValidationError};
