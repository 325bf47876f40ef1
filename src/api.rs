//! HTTP API: analysis and rewrite endpoints, health check and OpenAPI docs.

use axum::{
    body::Bytes,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::analysis::{analyze_message, AnalysisResult, Emotions};
use crate::config::ServerConfig;
use crate::error::{ApiError, ErrorResponse};
use crate::rewrite::{rewrite_reply, RewriteMode};
use crate::sentiment::Sentiment;
use crate::tone::Tone;

#[derive(OpenApi)]
#[openapi(
    paths(analyze, rewrite, health),
    components(
        schemas(
            AnalyzeRequest,
            AnalysisResult,
            Emotions,
            Sentiment,
            Tone,
            RewriteRequest,
            RewriteResponse,
            RewriteMode,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "analysis", description = "Message sentiment, tone and reply suggestions"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Text to analyze; must not be blank
    pub message: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RewriteRequest {
    pub original_message: Option<String>,
    /// One of formal, friendly, calm, assertive, apologetic
    pub mode: Option<String>,
    pub current_reply: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResponse {
    /// Absent only when the mode is unknown and no current reply was sent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub rewritten_reply: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Create the application router
pub fn create_router(config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/analyze", post(analyze))
        .route("/api/rewrite", post(rewrite))
        .route("/health", get(health));

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving static files from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors_origins))
}

const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// No origins configured means development mode: allow everything.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        tracing::warn!("No CORS origins configured, allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed = allowed_origins(origins);
    tracing::info!("CORS configured with {} origins", parsed.len());
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Parses configured origins, falling back to localhost when none is valid.
fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {:?}", origin);
                None
            })
        })
        .collect();

    if parsed.is_empty() {
        tracing::error!(
            "All configured CORS origins are invalid, falling back to {}",
            FALLBACK_ORIGIN
        );
        return vec![HeaderValue::from_static(FALLBACK_ORIGIN)];
    }
    parsed
}

/// Blank in the JavaScript sense: Unicode whitespace plus the byte order mark.
fn is_blank(message: &str) -> bool {
    message
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Pulls the message out of a raw analyze body.
///
/// Unparsable JSON and a `null` body are processing failures; anything else
/// without a non-blank string `message` is a validation failure.
fn parse_message(body: &[u8]) -> Result<String, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(ApiError::AnalyzeFailed)?;
    if value.is_null() {
        return Err(ApiError::AnalyzeFailed(serde_json::Error::custom(
            "request body is null",
        )));
    }

    match value.get("message").and_then(Value::as_str) {
        Some(message) if !is_blank(message) => Ok(message.to_string()),
        _ => Err(ApiError::InvalidMessage),
    }
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Message analyzed", body = AnalysisResult),
        (status = 400, description = "Missing or blank message", body = ErrorResponse),
        (status = 500, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn analyze(body: Bytes) -> Result<Json<AnalysisResult>, ApiError> {
    let message = parse_message(&body)?;
    let result = analyze_message(&message);

    tracing::info!(
        sentiment = ?result.sentiment,
        tone = %result.tone,
        chars = message.chars().count(),
        "Message analyzed"
    );
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/rewrite",
    tag = "analysis",
    request_body = RewriteRequest,
    responses(
        (status = 200, description = "Canned reply for the mode, or the current reply for an unknown mode", body = RewriteResponse),
        (status = 500, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn rewrite(body: Bytes) -> Result<Json<RewriteResponse>, ApiError> {
    let value: Value = serde_json::from_slice(&body).map_err(ApiError::RewriteFailed)?;
    if value.is_null() {
        return Err(ApiError::RewriteFailed(serde_json::Error::custom(
            "request body is null",
        )));
    }

    // A non-string mode is just an unknown mode; the current reply is echoed
    // back with whatever JSON type it arrived as.
    let rewritten = rewrite_reply(
        value.get("mode").and_then(Value::as_str),
        value.get("originalMessage").and_then(Value::as_str),
        value.get("currentReply").cloned(),
    );

    Ok(Json(RewriteResponse {
        rewritten_reply: rewritten,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
