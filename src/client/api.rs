//! HTTP access to the authentication backend.
//!
//! The flows only talk to the `AuthApi` trait; `HttpAuthApi` is the reqwest implementation used
//! by the application and by the integration tests against a mock server.

use async_trait::async_trait;
use dioxus_logger::tracing;
use reqwest::{
    multipart::{Form, Part},
    Response, StatusCode,
};

use crate::{
    client::{config::Config, error::ApiError},
    model::{
        api::ErrorDto,
        auth::{AuthResponse, LoginRequest, RegistrationRequest, Role},
        user::SessionUser,
    },
};

#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST {base}/{role}/login` with a JSON body.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST {base}/{role}/signup` with a multipart body.
    async fn signup(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError>;

    /// Resolve the user behind `token`, `None` when the backend does not recognise it.
    async fn current_user(&self, token: &str) -> Result<Option<SessionUser>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    config: Config,
}

impl HttpAuthApi {
    pub fn new(config: Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: Config) -> Self {
        Self { client, config }
    }

    fn login_url(&self, role: Role) -> String {
        format!("{}/{}/login", self.config.api_base_url, role.as_str())
    }

    fn signup_url(&self, role: Role) -> String {
        format!("{}/{}/signup", self.config.api_base_url, role.as_str())
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.login_url(request.role);
        tracing::debug!(role = %request.role, "Sending login request");

        let response = self.client.post(&url).json(request).send().await?;

        parse_auth_response(response).await
    }

    async fn signup(&self, request: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        let url = self.signup_url(request.role);
        tracing::debug!(role = %request.role, "Sending signup request");

        let image = &request.profile_image;
        let mut part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        if let Some(content_type) = &image.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        }

        let form = Form::new()
            .text("username", request.username.clone())
            .text("email", request.email.clone())
            .text("password", request.password.clone())
            .part("profileImage", part)
            .text("role", request.role.as_str());

        let response = self.client.post(&url).multipart(form).send().await?;

        parse_auth_response(response).await
    }

    async fn current_user(&self, token: &str) -> Result<Option<SessionUser>, ApiError> {
        let response = self
            .client
            .get(self.config.session_url())
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let user = response.json::<SessionUser>().await.map_err(|e| {
                    ApiError::Decode(format!("Failed to parse session user data: {}", e))
                })?;
                Ok(Some(user))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(None),
            _ => Err(status_error(response).await),
        }
    }
}

async fn parse_auth_response(response: Response) -> Result<AuthResponse, ApiError> {
    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build an `ApiError::Status`, keeping the backend's `{message}` when the body has one.
async fn status_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorDto>(&body)
            .ok()
            .and_then(|dto| dto.message),
        Err(err) => {
            tracing::debug!("Failed to read error body: {}", err);
            None
        }
    };

    ApiError::Status { status, message }
}
