//! Error handling and HTTP error conversion
//!
//! Only problems with the inbound delivery itself become HTTP errors. Failures
//! of the GitHub calls made while provisioning are reported in the normal
//! `200` response body instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use repo_guard_core::EventError;
use serde::{Deserialize, Serialize};

use crate::signature::SignatureError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Standard error response for all API errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetails,
}

/// Error details structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional context (optional, type varies by error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Errors returned to the webhook sender.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The delivery body could not be understood.
    #[error("{0}")]
    BadRequest(#[from] EventError),

    /// The delivery signature was missing or wrong.
    #[error("{0}")]
    Unauthorized(#[from] SignatureError),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "InvalidPayload"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "InvalidSignature"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Log error server-side
        log_error(&self, status);

        let error_response = ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message: self.to_string(),
                details: None,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    match status {
        StatusCode::UNAUTHORIZED => {
            tracing::warn!("API error: {} - {}", status, error);
        }
        _ => {
            tracing::info!("API error: {} - {}", status, error);
        }
    }
}
