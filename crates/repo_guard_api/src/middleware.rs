//! Request middleware
//!
//! Adds a request id to every request and logs its start and completion.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;

/// Response header carrying the generated request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Header GitHub uses to identify a delivery
pub const GITHUB_DELIVERY_HEADER: &str = "x-github-delivery";

/// Request tracing middleware.
///
/// Adds request ID and logging context for observability. The GitHub delivery
/// id is recorded as well so that log lines can be matched with the delivery
/// list in the GitHub UI.
pub async fn tracing_middleware(request: Request, next: Next) -> Response {
    // Generate request ID
    let request_id = uuid::Uuid::new_v4().to_string();
    let delivery_id = request
        .headers()
        .get(GITHUB_DELIVERY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        delivery_id = %delivery_id
    );

    async move {
        tracing::info!(
            method = %request.method(),
            uri = %request.uri(),
            "Request started"
        );

        let mut response = next.run(request).await;

        tracing::info!(status = %response.status(), "Request completed");

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}
