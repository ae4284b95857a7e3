use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::geometry::GeometryError;
use crate::imagery::ImageryError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("selection error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("imagery error: {0}")]
    Imagery(#[from] ImageryError),

    #[error("submission did not complete: {0}")]
    Submission(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("output serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
