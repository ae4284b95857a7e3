use std::sync::Arc;

use crate::auth::{self, TokenClient};
use crate::config::AppConfig;
use crate::imagery::{ImageryClient, ImageryParams};
use crate::transport::{Transport, UreqTransport};
use crate::widget::WidgetConfig;

/// Resolved configuration plus the shared transport the clients are built on.
#[derive(Clone)]
pub struct AppContext {
    config: AppConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppContext")
            .field("config", &self.config)
            .finish()
    }
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let transport = Arc::new(UreqTransport::new(config.http.timeout()));
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: AppConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn token_client(&self) -> auth::Result<TokenClient> {
        let credentials = self.config.auth.credentials()?;
        Ok(TokenClient::new(
            self.config.auth.token_url.clone(),
            credentials,
            Arc::clone(&self.transport),
        ))
    }

    pub fn imagery_client(&self) -> ImageryClient {
        ImageryClient::new(
            self.config.imagery.process_url.clone(),
            Arc::clone(&self.transport),
        )
    }

    pub fn imagery_params(&self) -> &ImageryParams {
        &self.config.imagery.params
    }

    pub fn widget_config(&self) -> &WidgetConfig {
        &self.config.widget
    }
}
