use async_trait::async_trait;
use reqwest::Client;

use super::interface::{TranslateError, TranslateInterface, TranslationRequest, TranslationResult};

/// Page-side client for the relay endpoint. The UI controller goes through
/// this instead of talking to the external service directly.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl TranslateInterface for RelayClient {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let url = format!("{}/translate", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Rejected(status));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|err| TranslateError::MalformedResponse(err.to_string()))
    }
}
