//! RepoGuard HTTP API
//!
//! This crate receives GitHub webhook deliveries and hands repository-creation
//! events to [`repo_guard_core`].
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - Webhook signature verification
//! - HTTP request/response translation
//! - Error mapping from domain to HTTP
//! - Configuration, routing and server startup
//!
//! **CRITICAL**: This crate must never be imported by business logic.
//! The dependency flows: HTTP API → Business Logic, never the reverse.

use std::sync::Arc;

use repo_guard_core::RepositoryProvisioner;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod signature;

// Re-export key types for convenience
pub use config::{ConfigError, LogFormat, ServiceConfig};
pub use errors::{ApiError, ErrorResponse};
pub use server::{ApiConfig, ApiServer};
pub use signature::SignatureVerifier;

/// Default API port
pub const DEFAULT_PORT: u16 = 5000;

/// Path GitHub delivers webhooks to
pub const WEBHOOK_PATH: &str = "/github-webhook";

/// Application state shared across handlers
///
/// Everything in here is immutable after startup; each delivery is handled
/// independently.
#[derive(Clone)]
pub struct AppState {
    /// Runs the setup steps for new public repositories
    pub provisioner: Arc<RepositoryProvisioner>,

    /// Verifies `X-Hub-Signature-256`. `None` disables verification.
    pub signature_verifier: Option<Arc<SignatureVerifier>>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        provisioner: RepositoryProvisioner,
        signature_verifier: Option<SignatureVerifier>,
    ) -> Self {
        Self {
            provisioner: Arc::new(provisioner),
            signature_verifier: signature_verifier.map(Arc::new),
        }
    }
}
