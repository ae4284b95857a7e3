use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::transport::Transport;

use super::{AuthError, ClientCredentials, Result};

const TOKEN_HEADERS: [(&str, &str); 2] = [("Accept", "*/*"), ("Cache-Control", "no-cache")];

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Bearer credential returned by the token endpoint. Expiry is kept for
/// reporting only; the token is never refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_in: Option<u64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AccessToken")
            .field("value", &self.preview())
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expires_in: None,
        }
    }

    pub fn with_expiry(mut self, expires_in: Option<u64>) -> Self {
        self.expires_in = expires_in;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }

    /// First characters of the token, safe for logs.
    pub fn preview(&self) -> String {
        let head = self.value.chars().take(8).collect::<String>();
        format!("{head}…")
    }
}

impl TryFrom<TokenResponse> for AccessToken {
    type Error = AuthError;

    fn try_from(response: TokenResponse) -> Result<Self> {
        let value = response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingAccessToken)?;
        Ok(AccessToken::new(value).with_expiry(response.expires_in))
    }
}

#[derive(Clone)]
pub struct TokenClient {
    token_url: String,
    credentials: ClientCredentials,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for TokenClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TokenClient")
            .field("token_url", &self.token_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl TokenClient {
    pub fn new(
        token_url: impl Into<String>,
        credentials: ClientCredentials,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            token_url: token_url.into(),
            credentials,
            transport,
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Single client-credentials exchange. No retry.
    pub fn request_token(&self) -> Result<AccessToken> {
        debug!(
            url = %self.token_url,
            client_id = self.credentials.client_id(),
            "requesting access token"
        );
        let reply =
            self.transport
                .post_form(&self.token_url, &TOKEN_HEADERS, &self.credentials.form())?;
        let response: TokenResponse = serde_json::from_str(&reply.body)?;
        let token = AccessToken::try_from(response)?;
        info!(
            token = %token.preview(),
            expires_in = ?token.expires_in(),
            "access token received"
        );
        Ok(token)
    }
}
