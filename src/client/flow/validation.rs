use crate::{
    client::{
        error::{FormField, ValidationError},
        flow::{LoginForm, SignUpForm},
    },
    model::auth::{LoginRequest, RegistrationRequest},
};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Both email and password must be non-blank. Values are sent as typed.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, ValidationError> {
    if is_blank(&form.email) || is_blank(&form.password) {
        return Err(ValidationError::MissingCredentials);
    }

    Ok(LoginRequest {
        role: form.role,
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

/// Checks every required signup input at once.
///
/// The image check is reported separately from the text fields and comes first, so an attempt
/// can fail with up to two errors.
pub fn validate_signup(form: &SignUpForm) -> Result<RegistrationRequest, Vec<ValidationError>> {
    let mut missing = Vec::new();
    if is_blank(&form.username) {
        missing.push(FormField::Username);
    }
    if is_blank(&form.email) {
        missing.push(FormField::Email);
    }
    if is_blank(&form.password) {
        missing.push(FormField::Password);
    }
    if form.role.is_none() {
        missing.push(FormField::Role);
    }

    let mut errors = Vec::new();
    if form.profile_image.is_none() {
        errors.push(ValidationError::MissingProfileImage);
    }
    if !missing.is_empty() {
        errors.push(ValidationError::MissingFields(missing));
    }

    match (form.role, &form.profile_image) {
        (Some(role), Some(image)) if errors.is_empty() => Ok(RegistrationRequest {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            role,
            profile_image: image.clone(),
        }),
        _ => Err(errors),
    }
}
