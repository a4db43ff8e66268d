//! Server setup and shared application state.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, get_service, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    config::AppConfig,
    language_detection::MultiDetector,
    types::{DetectionRequest, DetectionResponse, Strategy, StrategyOutcome},
    Error, Result,
};

/// Shared application state for the HTTP server.
pub struct AppState {
    detector: MultiDetector,
    min_text_length: usize,
}

impl AppState {
    /// Create state around an already-built detector.
    pub fn new(detector: MultiDetector, config: &AppConfig) -> Self {
        Self {
            detector,
            min_text_length: config.detection.min_text_length,
        }
    }

    /// Access the detector for downstream handlers.
    pub fn detector(&self) -> &MultiDetector {
        &self.detector
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the HTTP router for the service.
pub fn build_router(state: Arc<AppState>, config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/detect", post(detect))
        .route("/health", get(health))
        .nest_service(
            "/static",
            get_service(ServeDir::new(&config.server.static_dir)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.server.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Main page with the detection interface
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Liveness probe endpoint.
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "message": "Language Detection API is running"
    }))
}

/// Validate the request text and return it trimmed.
pub fn validate_text(text: &str, min_len: usize) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("Text input is required".to_string()));
    }
    if trimmed.chars().count() < min_len {
        return Err(Error::InvalidInput(format!(
            "Text must be at least {} characters long for accurate detection",
            min_len
        )));
    }
    Ok(trimmed)
}

/// API endpoint for language detection
async fn detect(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match run_detection(state, &body).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            match &e {
                Error::InvalidInput(_) => tracing::warn!(error = %e, "rejected detection request"),
                _ => tracing::error!(error = %e, "detection request failed"),
            }
            e.into_response()
        }
    }
}

/// Parse a `/detect` body. Anything but a JSON object is malformed.
pub fn parse_request(body: &[u8]) -> Result<DetectionRequest> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| Error::MalformedRequest(e.to_string()))?;
    if !value.is_object() {
        return Err(Error::MalformedRequest(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| Error::MalformedRequest(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

async fn run_detection(state: Arc<AppState>, body: &[u8]) -> Result<DetectionResponse> {
    let request = parse_request(body)?;

    let text: Arc<str> = validate_text(&request.text, state.min_text_length)?.into();

    tracing::info!(
        method = ?request.method,
        chars = text.chars().count(),
        "detecting language"
    );

    let traditional = request.method.includes(Strategy::Traditional).then(|| {
        let state = Arc::clone(&state);
        let text = Arc::clone(&text);
        tokio::task::spawn_blocking(move || state.detector().classify_traditional(&text))
    });
    let pretrained = request.method.includes(Strategy::Pretrained).then(|| {
        let state = Arc::clone(&state);
        let text = Arc::clone(&text);
        tokio::task::spawn_blocking(move || state.detector().classify_pretrained(&text))
    });

    let (traditional, pretrained) = tokio::join!(
        settle(Strategy::Traditional, traditional),
        settle(Strategy::Pretrained, pretrained),
    );

    Ok(DetectionResponse {
        traditional,
        pretrained,
    })
}

/// Turn a strategy task into its outcome, absorbing errors and panics.
async fn settle<T>(
    strategy: Strategy,
    task: Option<tokio::task::JoinHandle<Result<T>>>,
) -> Option<StrategyOutcome<T>> {
    let task = task?;
    let result = match task.await {
        Ok(result) => result,
        Err(join_error) => Err(Error::classification(
            strategy,
            format!("worker aborted: {}", join_error),
        )),
    };

    if let Err(ref e) = result {
        tracing::error!(%strategy, error = %e, "strategy failed");
    }
    Some(result.into())
}

/// Wait for a shutdown signal.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text("  hello  ", 3).unwrap(), "hello");
        assert!(matches!(validate_text("   ", 3), Err(Error::InvalidInput(_))));

        let err = validate_text(" ab ", 3).unwrap_err();
        assert!(err.to_string().contains("at least 3 characters"));
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // three characters, nine bytes
        assert!(validate_text("日本語", 3).is_ok());
        assert!(validate_text("日本", 3).is_err());
    }

    #[test]
    fn test_error_status_mapping() {
        let response = Error::InvalidInput("Text input is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = Error::MalformedRequest("expected value".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_request_rejects_non_objects() {
        for raw in [r#"["Hello world","traditional"]"#, "[]", r#""Hello world""#, "42", "null"] {
            let err = parse_request(raw.as_bytes()).unwrap_err();
            assert!(matches!(err, Error::MalformedRequest(_)), "body {:?}", raw);
            assert!(err.to_string().starts_with("Detection failed: expected a JSON object"));
        }

        let request = parse_request(br#"{"text": "Hello world"}"#).unwrap();
        assert_eq!(request.text, "Hello world");
    }
}
