//! HTTP API.
//!
//! # Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `POST` | `/analyze` | `{metrics, ai_feedback, selected_method}` |
//! | `GET` | `/health` | `{"status": "healthy"}` |
//!
//! Failures carry `{"error": "..."}`: 400 for requests that cannot be scored,
//! 413 for oversized text, and 500 when a handler panics.

use std::any::Any;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clarimeter_core::config::Config;
use clarimeter_core::error::AnalysisError;
use clarimeter_core::service::{self, AnalyzeRequest};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

/// Settings shared by every handler. Immutable for the server's lifetime.
#[derive(Debug, Clone, Default)]
pub struct ApiState {
    /// Label echoed when a request names no method.
    pub default_method: Option<String>,
    /// Size limit on `text`, in bytes.
    pub max_input_bytes: Option<usize>,
}

impl ApiState {
    /// Take handler settings from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_method: config.default_method.clone(),
            max_input_bytes: config.input_limit(),
        }
    }
}

/// Worst-case growth of a string under JSON escaping.
const JSON_ESCAPE_FACTOR: usize = 6;

/// Create the application router.
pub fn router(state: ApiState) -> Router {
    // `\u0001` escapes inflate a byte sixfold, plus room for the envelope
    let body_limit = state
        .max_input_bytes
        .map(|max| max.saturating_mul(JSON_ESCAPE_FACTOR).saturating_add(64 * 1024));

    let routes = Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .with_state(state);

    let routes = match body_limit {
        Some(limit) => routes.layer(DefaultBodyLimit::max(limit)),
        None => routes.layer(DefaultBodyLimit::disable()),
    };

    with_middleware(routes)
}

fn with_middleware(routes: Router) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}

/// Run the HTTP server until Ctrl-C.
pub async fn run_server(state: ApiState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "HTTP API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[tracing::instrument(skip_all)]
async fn analyze(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "request body rejected");
            return error_response(rejection.status(), rejection.body_text());
        }
    };
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    match service::evaluate(
        &request,
        state.default_method.as_deref(),
        state.max_input_bytes,
    ) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            tracing::debug!(error = %err, "request rejected");
            error_response(status_for(&err), err.to_string())
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

/// Anything that is not a JSON object counts as a request without text.
fn parse_request(body: &[u8]) -> Result<AnalyzeRequest, String> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| AnalysisError::MissingText.to_string())?;
    if !value.is_object() {
        return Err(AnalysisError::MissingText.to_string());
    }
    serde_json::from_value(value).map_err(|e| format!("invalid request: {e}"))
}

const fn status_for(err: &AnalysisError) -> StatusCode {
    match err {
        AnalysisError::InputTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        AnalysisError::MissingText | AnalysisError::EmptyText | AnalysisError::Unanalyzable => {
            StatusCode::BAD_REQUEST
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "internal error".to_string());
    tracing::error!(%message, "handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}
