use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message the signup endpoint returns for accounts that still need approval.
///
/// Compared byte-for-byte against the backend response, including its spelling.
pub const PENDING_APPROVAL_MESSAGE: &str = "Sucessfully registered. Awaiting approval";

/// Account class, selects both the endpoint path and the backend authorization class
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Instructor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Instructor, Role::Admin];

    /// Path segment used when building endpoint URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }

    /// Label shown in the role select
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Instructor => "Instructor",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role: {0:?}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "user" => Ok(Self::User),
            "instructor" => Ok(Self::Instructor),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// JSON body of the login request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub role: Role,
    pub email: String,
    pub password: String,
}

/// Profile picture picked in the signup form
#[derive(Clone, PartialEq)]
pub struct ProfileImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ProfileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Validated signup payload, sent as multipart form data
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profile_image: ProfileImage,
}

/// Success body shared by the login and signup endpoints
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Whether the backend created the account but has not approved it yet
    pub fn is_pending_approval(&self) -> bool {
        self.message.as_deref() == Some(PENDING_APPROVAL_MESSAGE)
    }
}
