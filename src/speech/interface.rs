use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transcript yielded by a speech recognizer. Declared at the boundary so
/// callers never touch the recognizer's raw event shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("speech service reported failure: {0}")]
    Failed(String),

    #[error("malformed speech service response: {0}")]
    MalformedResponse(String),
}

/// Text-to-speech capability. Playback completion is not observed by
/// callers; speak-and-move-on.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError>;
}

/// Speech-to-text capability. Resolves with the first recognized transcript.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, lang: &str) -> Result<Transcript, SpeechError>;
}
