use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed CSV: {0}")]
    MalformedCsv(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MalformedCsv(msg) => (
                StatusCode::BAD_REQUEST,
                "MALFORMED_CSV",
                format!("Could not parse curator CSV: {msg}"),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                let code = match e {
                    LlmError::Api { .. } => "UPSTREAM_ERROR",
                    LlmError::Http(_) => "UPSTREAM_UNREACHABLE",
                    LlmError::Parse(_) | LlmError::EmptyChoices => "UPSTREAM_RESPONSE",
                };
                (StatusCode::BAD_GATEWAY, code, e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
