use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::{debug, error};
use uuid::Uuid;

use crate::state::AppState;
use crate::translate::{TranslateError, TranslationRequest};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Relay endpoint
        .route("/translate", any(translate_endpoint))
        // Health check
        .route("/api/health", get(health_check))
        // Static hosting of the page shell
        .fallback_service(ServeDir::new(&system_config.static_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// `POST /translate`: validates the three required fields and forwards them
/// to the configured external service. Registered with `any` so other verbs
/// are answered with the JSON 405 envelope instead of a bare status.
async fn translate_endpoint(
    State(state): State<AppState>,
    method: Method,
    payload: Option<Json<Value>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if method != Method::POST {
        return Err((
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({"error": "Method not allowed"})),
        ));
    }

    let payload = payload.map(|Json(value)| value).unwrap_or(Value::Null);
    let request = parse_request(&payload).map_err(|err| error_response(&err))?;

    let request_id = Uuid::new_v4();
    debug!(
        %request_id,
        source = %request.source_lang,
        target = %request.target_lang,
        "relaying translation request"
    );

    match state.translator.translate(request).await {
        Ok(result) => Ok(Json(json!({"translatedText": result.translated_text}))),
        Err(err) => {
            error!(%request_id, error = %err, "translation request failed");
            Err(error_response(&err))
        }
    }
}

fn parse_request(payload: &Value) -> Result<TranslationRequest, TranslateError> {
    let text = required_field(payload, "text");
    let source_lang = required_field(payload, "sourceLang");
    let target_lang = required_field(payload, "targetLang");

    match (text, source_lang, target_lang) {
        (Some(text), Some(source_lang), Some(target_lang)) => Ok(TranslationRequest {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        }),
        _ => Err(TranslateError::MissingFields),
    }
}

fn required_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn error_response(err: &TranslateError) -> (StatusCode, Json<Value>) {
    match err {
        TranslateError::MissingFields => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing required fields"})),
        ),
        // Service down, rejected request, garbled payload: the caller only
        // ever sees the generic message.
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Translation failed"})),
        ),
    }
}
