use crate::transport::TransportError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageryError>;

#[derive(Debug, Error)]
pub enum ImageryError {
    #[error("imagery request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("imagery response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("imagery response contains no response entries")]
    EmptyResponse,

    #[error("imagery response carries no image url")]
    MissingImageUrl,

    #[error("invalid imagery parameters: {0}")]
    InvalidParams(String),
}
