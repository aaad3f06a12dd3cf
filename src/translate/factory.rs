use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tracing::info;

use crate::config::TranslateConfig;
use super::interface::TranslateInterface;
use super::libre::LibreClient;

/// Factory for creating translation clients
pub struct TranslateFactory;

impl TranslateFactory {
    /// Create a translation client based on configuration
    pub fn create_translator(config: &TranslateConfig) -> Result<Arc<dyn TranslateInterface>> {
        info!("Initializing translation client for {}", config.endpoint);

        let client = LibreClient::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Arc::new(client))
    }
}
