//! HTTP request handlers
//!
//! Handlers translate HTTP requests to domain operations and domain results
//! to HTTP responses.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use repo_guard_core::{classify_event, EventDisposition};
use tracing::{debug, info};

use crate::{
    errors::ApiError,
    models::{HealthCheckResponse, WebhookResponse},
    signature::SIGNATURE_HEADER,
    AppState,
};

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;

/// Header naming the webhook event type
pub const GITHUB_EVENT_HEADER: &str = "x-github-event";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn acknowledge() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// POST /github-webhook
///
/// Receives GitHub webhook deliveries. Only `repository` events with action
/// `created` for public repositories cause any GitHub API calls; every other
/// delivery is acknowledged with `200 OK`.
///
/// Responds `401` when signature verification is enabled and fails, and `400`
/// when a repository event body cannot be read.
pub async fn github_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if let Some(verifier) = &state.signature_verifier {
        verifier.verify(&body, header_str(&headers, SIGNATURE_HEADER))?;
    }

    let event_type = header_str(&headers, GITHUB_EVENT_HEADER);
    let payload = match classify_event(event_type, &body)? {
        EventDisposition::Ignore(reason) => {
            debug!(reason = ?reason, "Delivery ignored");
            return Ok(acknowledge());
        }
        EventDisposition::SkipPrivate(payload) => {
            log_new_repository(&payload);
            info!(
                repository = %payload.repository.name,
                "Repository is private. Skipping README, branch protection and notification."
            );
            return Ok(acknowledge());
        }
        EventDisposition::Provision(payload) => payload,
    };

    log_new_repository(&payload);

    let report = state.provisioner.provision(&payload.repository_ref()).await;

    Ok((StatusCode::OK, Json(WebhookResponse::from(report))).into_response())
}

fn log_new_repository(payload: &repo_guard_core::RepositoryEventPayload) {
    info!(
        owner = %payload.repository.owner.login,
        repository = %payload.repository.name,
        url = payload.repository.url.as_deref().unwrap_or("-"),
        private = payload.repository.private,
        "New repository created"
    );
}

/// GET /health
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
