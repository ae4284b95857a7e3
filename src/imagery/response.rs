use serde::Deserialize;
use serde_json::Value;

use super::{ImageryError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseItem {
    #[serde(default)]
    pub url: Option<String>,
}

/// The only part of the process API answer that is consumed. Other fields are
/// kept opaque.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageryResponse {
    pub response: Vec<ResponseItem>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ImageryResponse {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// `response[0].url`; an absent or empty url counts as missing.
    pub fn image_url(&self) -> Result<&str> {
        let first = self.response.first().ok_or(ImageryError::EmptyResponse)?;
        first
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ImageryError::MissingImageUrl)
    }
}
