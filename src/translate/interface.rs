use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A translation request as carried on the relay wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// The relay's uniform success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
}

/// Failure taxonomy for translation calls. Everything except
/// `MissingFields` collapses into the generic 500 on the wire; the
/// distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("missing required fields")]
    MissingFields,

    #[error("translation service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("translation service rejected the request: status {0}")]
    Rejected(reqwest::StatusCode),

    #[error("malformed translation response: {0}")]
    MalformedResponse(String),
}

/// Interface for anything that can turn a [`TranslationRequest`] into a
/// [`TranslationResult`]: the external provider client on the server side,
/// the relay client on the page side, mocks in tests.
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, TranslateError>;
}
