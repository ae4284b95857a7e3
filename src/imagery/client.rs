use std::sync::Arc;

use tracing::debug;

use crate::auth::AccessToken;
use crate::transport::Transport;

use super::{ImageryRequest, ImageryResponse, Result};

#[derive(Clone)]
pub struct ImageryClient {
    process_url: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ImageryClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ImageryClient")
            .field("process_url", &self.process_url)
            .finish()
    }
}

impl ImageryClient {
    pub fn new(process_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            process_url: process_url.into(),
            transport,
        }
    }

    /// One authenticated POST of the request body. No retry.
    pub fn process(
        &self,
        token: &AccessToken,
        request: &ImageryRequest,
    ) -> Result<ImageryResponse> {
        let body = serde_json::to_string(request)?;
        let authorization = token.bearer();
        let headers = [
            ("Content-Type", "application/json"),
            ("Authorization", authorization.as_str()),
        ];
        let reply = self.transport.post_json(&self.process_url, &headers, &body)?;
        debug!(status = reply.status, body = %reply.body, "response from imagery service");
        ImageryResponse::from_json(&reply.body)
    }
}
