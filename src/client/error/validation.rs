use std::fmt;

use thiserror::Error;

/// Required text inputs of the signup form, in the order they are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Email,
    Password,
    Role,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Role => "Role",
        })
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Client side validation failure. The `Display` output is the toast text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Please fill: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),
    #[error("Please upload your profile image")]
    MissingProfileImage,
}
