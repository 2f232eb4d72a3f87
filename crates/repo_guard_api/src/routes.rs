//! HTTP routing configuration
//!
//! - POST   /github-webhook - GitHub webhook deliveries
//! - GET    /health         - Health check

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::{handlers, middleware as api_middleware, AppState, WEBHOOK_PATH};

/// Create the complete router with all routes configured.
///
/// This function sets up:
/// - All endpoint routes
/// - Request id and tracing middleware
///
/// No request timeout is applied: a delivery that has started provisioning
/// always runs every step and answers with its report.
pub fn create_router(state: AppState) -> Router {
    // Configure request tracing. Headers are left out of the span because
    // deliveries carry the signature header.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new())
        .on_response(DefaultOnResponse::new());

    Router::new()
        .route(WEBHOOK_PATH, post(handlers::github_webhook))
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(trace_layer)
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
