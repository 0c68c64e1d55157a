//! Error bodies shared by the HTTP adapters.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::lead::LeadError;

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self {
            code: "DATABASE_ERROR".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "retryable": true })),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Maps a handler error to its HTTP response.
pub fn lead_error_response(error: LeadError) -> Response {
    match error {
        LeadError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Lead", &id.to_string())),
        )
            .into_response(),
        LeadError::ChatSessionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Chat session", &id.to_string())),
        )
            .into_response(),
        LeadError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(
                &field,
                format!("Validation failed for {}: {}", field, message),
            )),
        )
            .into_response(),
        LeadError::Infrastructure(msg) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::database(msg)),
        )
            .into_response(),
        LeadError::Internal(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}

/// 400 for a path segment that doesn't parse.
pub fn invalid_path(what: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid {}", what))),
    )
        .into_response()
}
