use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::{self, AuthError, ClientCredentials};
use crate::imagery::ImageryParams;
use crate::widget::WidgetConfig;

use super::{ConfigError, Result};

pub const DEFAULT_TOKEN_URL: &str =
    "https://services.sentinel-hub.com/auth/realms/main/protocol/openid-connect/token";
pub const DEFAULT_PROCESS_URL: &str = "https://services.sentinel-hub.com/api/v1/process";

pub const ENV_CLIENT_ID: &str = "IMAGERY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "IMAGERY_CLIENT_SECRET";
pub const ENV_TOKEN_URL: &str = "IMAGERY_TOKEN_URL";
pub const ENV_PROCESS_URL: &str = "IMAGERY_PROCESS_URL";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub token_url: String,
    pub client_id: Option<String>,
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AuthConfig")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            client_id: None,
            client_secret: None,
        }
    }
}

impl AuthConfig {
    pub fn credentials(&self) -> auth::Result<ClientCredentials> {
        let client_id = self.client_id.as_deref().ok_or_else(|| {
            AuthError::MissingCredentials(format!("client id is not set (use {ENV_CLIENT_ID})"))
        })?;
        let client_secret = self.client_secret.as_deref().ok_or_else(|| {
            AuthError::MissingCredentials(format!(
                "client secret is not set (use {ENV_CLIENT_SECRET})"
            ))
        })?;
        ClientCredentials::new(client_id, client_secret)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageryConfig {
    pub process_url: String,
    #[serde(flatten)]
    pub params: ImageryParams,
}

impl Default for ImageryConfig {
    fn default() -> Self {
        Self {
            process_url: DEFAULT_PROCESS_URL.to_string(),
            params: ImageryParams::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per request timeout. Unset means requests may wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub imagery: ImageryConfig,
    pub http: HttpConfig,
    pub widget: WidgetConfig,
}

impl AppConfig {
    /// Applies overrides from `lookup`, normally the process environment.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(value) = present(ENV_CLIENT_ID) {
            self.auth.client_id = Some(value);
        }
        if let Some(value) = present(ENV_CLIENT_SECRET) {
            self.auth.client_secret = Some(value);
        }
        if let Some(value) = present(ENV_TOKEN_URL) {
            self.auth.token_url = value;
        }
        if let Some(value) = present(ENV_PROCESS_URL) {
            self.imagery.process_url = value;
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("auth.token_url", &self.auth.token_url),
            ("imagery.process_url", &self.imagery.process_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Invalid(format!(
                    "`{name}` must be an http(s) URL, got `{url}`"
                )));
            }
        }
        if self.http.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "`http.timeout_secs` must be greater than zero".to_string(),
            ));
        }
        self.imagery
            .params
            .validate()
            .map_err(|error| ConfigError::Invalid(error.to_string()))?;
        self.widget.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}
