use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::interface::{TranslateError, TranslateInterface, TranslationRequest, TranslationResult};

/// Wire format expected by the LibreTranslate-compatible endpoint.
#[derive(Debug, Serialize)]
struct UpstreamRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

/// Client for the external translation service.
pub struct LibreClient {
    client: Client,
    endpoint: String,
}

impl LibreClient {
    /// Create a client with an explicit per-request timeout.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    fn parse_response(value: &Value) -> Result<TranslationResult, TranslateError> {
        let translated = value
            .get("translatedText")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                TranslateError::MalformedResponse("missing translatedText".to_string())
            })?;

        Ok(TranslationResult {
            translated_text: translated.to_string(),
        })
    }
}

#[async_trait]
impl TranslateInterface for LibreClient {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let body = UpstreamRequest {
            q: &request.text,
            source: &request.source_lang,
            target: &request.target_lang,
            format: "text",
        };

        debug!(
            endpoint = %self.endpoint,
            source = %request.source_lang,
            target = %request.target_lang,
            "forwarding translation to external service"
        );

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Rejected(status));
        }

        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|err| TranslateError::MalformedResponse(err.to_string()))?;

        Self::parse_response(&value)
    }
}
