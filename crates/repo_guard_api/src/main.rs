//! RepoGuard webhook server
//!
//! Main binary for running the webhook receiver in production or development.
//!
//! # Environment Variables
//!
//! - `GITHUB_TOKEN`: Token used for all GitHub API calls (required)
//! - `GITHUB_API_URL`: REST API base URL (default: https://api.github.com)
//! - `GITHUB_WEBHOOK_SECRET`: Secret for `X-Hub-Signature-256` verification (optional)
//! - `NOTIFICATION_ISSUE_ENABLED`: Open a summary issue after setup (default: true)
//! - `API_PORT`: Port to listen on (default: 5000)
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LOG_FORMAT`: `text` or `json` (default: text)
//! - `RUST_LOG`: Log level (default: info)

use std::{env, sync::Arc};

use github_client::{create_token_client, GitHubClient};
use repo_guard_api::{ApiServer, AppState, LogFormat, ServiceConfig, SignatureVerifier};
use repo_guard_core::{ProvisioningSettings, RepositoryProvisioner};
use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::new(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = ServiceConfig::from_env()?;

    init_tracing(config.log_format);

    if config.webhook_secret.is_none() {
        tracing::warn!(
            "GITHUB_WEBHOOK_SECRET is not set, webhook signatures will not be verified"
        );
    }

    let octocrab = create_token_client(
        config.github.token.expose_secret(),
        Some(&config.github.api_url),
    )?;
    let provisioner = RepositoryProvisioner::new(
        Arc::new(GitHubClient::new(octocrab)),
        ProvisioningSettings {
            notification_issue: config.notification_issue,
        },
    );
    let verifier = config.webhook_secret.map(SignatureVerifier::new);

    let state = AppState::new(provisioner, verifier);
    let server = ApiServer::new(config.server, state);

    tracing::info!("Starting RepoGuard webhook server");
    tracing::info!("GitHub API: {}", config.github.api_url);
    tracing::info!("Notification issue enabled: {}", config.notification_issue);

    // Start server with graceful shutdown
    server.serve().await
}
