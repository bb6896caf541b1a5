//! Builders for model values used across tests.

use learnhub::{
    client::flow::{LoginForm, SignUpForm},
    model::{
        auth::{ProfileImage, Role},
        user::SessionUser,
    },
};

use crate::constant::{TEST_EMAIL, TEST_PASSWORD, TEST_USERNAME};

pub fn session_user(role: Role) -> SessionUser {
    SessionUser {
        id: "64b7f0c2a1".to_string(),
        username: TEST_USERNAME.to_string(),
        email: TEST_EMAIL.to_string(),
        role,
        profile_image: None,
    }
}

pub fn login_form(role: Role) -> LoginForm {
    LoginForm {
        role,
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// A small payload that is valid UTF-8 so multipart bodies can be matched as text
pub fn profile_image() -> ProfileImage {
    ProfileImage {
        file_name: "avatar.png".to_string(),
        content_type: Some("image/png".to_string()),
        bytes: b"not-really-a-png".to_vec(),
    }
}

pub fn signup_form(role: Role) -> SignUpForm {
    SignUpForm {
        username: TEST_USERNAME.to_string(),
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        role: Some(role),
        profile_image: Some(profile_image()),
    }
}
