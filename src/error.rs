//! HTTP-facing errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid message")]
    InvalidMessage,

    #[error("Failed to analyze message")]
    AnalyzeFailed(#[source] serde_json::Error),

    #[error("Failed to rewrite reply")]
    RewriteFailed(#[source] serde_json::Error),
}

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidMessage => StatusCode::BAD_REQUEST,
            ApiError::AnalyzeFailed(_) | ApiError::RewriteFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::AnalyzeFailed(cause) => tracing::error!("Analysis error: {}", cause),
            ApiError::RewriteFailed(cause) => tracing::error!("Rewrite API error: {}", cause),
            ApiError::InvalidMessage => tracing::debug!("rejected blank or missing message"),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
