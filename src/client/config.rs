use reqwest::Url;

use crate::client::error::ConfigError;

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const API_SESSION_PATH_VAR: &str = "API_SESSION_PATH";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_SESSION_PATH: &str = "/me";

/// Backend location shared by every request the client makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute http(s) URL without a trailing slash
    pub api_base_url: String,
    /// Path of the session endpoint, always starting with `/`
    pub session_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_path: DEFAULT_SESSION_PATH.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Values baked in at compile time take precedence so wasm builds, which have no process
    /// environment, can be configured through the build environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = option_env!("API_BASE_URL")
            .map(str::to_string)
            .or_else(|| std::env::var(API_BASE_URL_VAR).ok())
            .ok_or_else(|| ConfigError::MissingEnvVar(API_BASE_URL_VAR.to_string()))?;
        let session_path = option_env!("API_SESSION_PATH")
            .map(str::to_string)
            .or_else(|| std::env::var(API_SESSION_PATH_VAR).ok());

        Self::new(&base_url, session_path.as_deref())
    }

    pub fn new(base_url: &str, session_path: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(base_url)?;

        let session_path = match session_path.map(str::trim) {
            None | Some("") => DEFAULT_SESSION_PATH.to_string(),
            Some(path) if path.starts_with('/') => path.to_string(),
            Some(path) => format!("/{path}"),
        };

        Ok(Self {
            api_base_url,
            session_path,
        })
    }

    pub fn session_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.session_path)
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: API_BASE_URL_VAR.to_string(),
        reason,
    };

    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(invalid(format!("unsupported scheme {scheme:?}"))),
    }
}
