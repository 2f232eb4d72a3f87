//! # RepoGuard Core
//!
//! Business logic for RepoGuard, a service that reacts to GitHub repository-creation
//! webhooks by setting up the new repository.
//!
//! ## Overview
//!
//! For every public repository that is created the service:
//! 1. Writes a placeholder `README.md` unless one already exists
//! 2. Resolves the default branch from the GitHub API
//! 3. Applies a fixed branch protection policy to that branch
//! 4. Optionally opens an issue summarising what was done
//!
//! ## Main Types
//!
//! - [`classify_event`] - Decides what to do with an inbound delivery
//! - [`RepositoryProvisioner`] - Runs the setup steps
//! - [`ProvisioningReport`] - Per-step outcome handed back to the HTTP layer
//!
//! This crate has no knowledge of HTTP; GitHub is reached through the
//! [`github_client::RepositoryClient`] trait.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use github_client::{create_token_client, GitHubClient};
//! use repo_guard_core::{classify_event, EventDisposition, ProvisioningSettings, RepositoryProvisioner};
//!
//! # async fn example(body: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitHubClient::new(create_token_client("ghp_example", None)?);
//! let provisioner = RepositoryProvisioner::new(Arc::new(client), ProvisioningSettings::default());
//!
//! if let EventDisposition::Provision(payload) = classify_event(Some("repository"), &body)? {
//!     let report = provisioner.provision(&payload.repository_ref()).await;
//!     println!("branch protection enabled: {}", report.branch_protection);
//! }
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod errors;
pub mod event;
pub mod policy;
pub mod provisioner;

pub use errors::EventError;
pub use event::{
    classify_event, EventDisposition, IgnoreReason, RepositoryEventPayload, RepositoryRef,
};
pub use provisioner::{
    ProvisioningReport, ProvisioningSettings, ReadmeOutcome, RepositoryProvisioner,
};
