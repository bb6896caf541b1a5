use serde::{Deserialize, Serialize};

/// The body returned by the backend when an API request fails
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    /// Human readable reason, surfaced to the user when present
    #[serde(default)]
    pub message: Option<String>,
}
