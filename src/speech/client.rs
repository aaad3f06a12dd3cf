use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::{SpeechError, SpeechRecognizer, SpeechSynthesizer, Transcript};

/// Client for the platform speech service, implementing both capabilities
/// over HTTP.
#[derive(Debug, Clone)]
pub struct SpeechServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SpeakRequest<'a> {
    text: &'a str,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct SpeakResponse {
    success: bool,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListenRequest<'a> {
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct ListenResponse {
    text: Option<String>,
    success: bool,
    error: Option<String>,
}

impl SpeechServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for SpeechServiceClient {
    async fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError> {
        let url = format!("{}/tts/speak", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&SpeakRequest {
                text,
                language: lang,
            })
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: SpeakResponse = serde_json::from_str(&body)
            .map_err(|err| SpeechError::MalformedResponse(err.to_string()))?;

        if parsed.success {
            debug!(language = %lang, "speech synthesis dispatched");
            Ok(())
        } else {
            Err(SpeechError::Failed(
                parsed.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

#[async_trait]
impl SpeechRecognizer for SpeechServiceClient {
    async fn recognize(&self, lang: &str) -> Result<Transcript, SpeechError> {
        let url = format!("{}/asr/listen", self.base_url);
        debug!(language = %lang, "starting speech recognition");

        let response = self
            .client
            .post(&url)
            .json(&ListenRequest { language: lang })
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: ListenResponse = serde_json::from_str(&body)
            .map_err(|err| SpeechError::MalformedResponse(err.to_string()))?;

        if !parsed.success {
            return Err(SpeechError::Failed(
                parsed.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        let text = parsed
            .text
            .ok_or_else(|| SpeechError::MalformedResponse("missing transcript text".to_string()))?;

        Ok(Transcript { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use serde_json::json;
    use std::net::SocketAddr;

    async fn spawn_speech_service() -> SocketAddr {
        let app = Router::new()
            .route(
                "/tts/speak",
                post(|| async { Json(json!({"success": true, "error": null})) }),
            )
            .route(
                "/asr/listen",
                post(|| async {
                    Json(json!({"text": "Hello from the microphone", "success": true, "error": null}))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn speak_round_trips_through_service() {
        let addr = spawn_speech_service().await;
        let client = SpeechServiceClient::new(format!("http://{addr}"));

        client.speak("Hola", "es").await.unwrap();
    }

    #[tokio::test]
    async fn recognize_yields_typed_transcript() {
        let addr = spawn_speech_service().await;
        let client = SpeechServiceClient::new(format!("http://{addr}"));

        let transcript = client.recognize("en").await.unwrap();
        assert_eq!(transcript.text, "Hello from the microphone");
    }

    #[tokio::test]
    async fn reported_failure_becomes_typed_error() {
        let app = Router::new().route(
            "/asr/listen",
            post(|| async { Json(json!({"text": null, "success": false, "error": "no microphone"})) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = SpeechServiceClient::new(format!("http://{addr}"));
        let err = client.recognize("en").await.unwrap_err();
        assert!(matches!(err, SpeechError::Failed(msg) if msg == "no microphone"));
    }
}
