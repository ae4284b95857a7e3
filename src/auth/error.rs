use crate::transport::TransportError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("token response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("token response does not contain an access_token")]
    MissingAccessToken,

    #[error("client credentials are not configured: {0}")]
    MissingCredentials(String),

    #[error("token worker failed: {0}")]
    Worker(String),
}
