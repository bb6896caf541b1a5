use serde::{Deserialize, Serialize};

use crate::model::auth::Role;

/// The authenticated user as reported by the session endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default, alias = "profileImage")]
    pub profile_image: Option<String>,
}
