//! Post-creation setup for public repositories.
//!
//! This module provides the [`RepositoryProvisioner`] which runs the fixed setup
//! sequence against a freshly created repository and reports the outcome of each
//! step.

use std::sync::Arc;

use github_client::{Error as GitHubError, RepositoryClient};
use serde::Serialize;
use tracing::{info, instrument, warn};
use url::Url;

use crate::{content, policy, RepositoryRef};

#[cfg(test)]
#[path = "provisioner_tests.rs"]
mod tests;

/// Knobs for the provisioning sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningSettings {
    /// Whether to open an issue summarising the setup
    pub notification_issue: bool,
}

impl Default for ProvisioningSettings {
    fn default() -> Self {
        Self {
            notification_issue: true,
        }
    }
}

/// Outcome of the README step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadmeOutcome {
    /// The placeholder README was written
    Created,
    /// A README was already present and left alone
    AlreadyExists,
    /// The README could not be checked or written
    Failed,
}

impl ReadmeOutcome {
    /// Returns true if the repository ends up with a README.
    pub fn is_success(&self) -> bool {
        matches!(self, ReadmeOutcome::Created | ReadmeOutcome::AlreadyExists)
    }
}

/// Result of provisioning one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningReport {
    /// The repository that was provisioned
    pub repository: RepositoryRef,

    /// Default branch as resolved from the API, `None` if the lookup failed
    pub default_branch: Option<String>,

    /// Outcome of the README step
    pub readme: ReadmeOutcome,

    /// Whether branch protection was applied
    pub branch_protection: bool,

    /// The notification issue, if one was created
    pub notification_issue: Option<Url>,
}

impl ProvisioningReport {
    /// Returns true if every attempted step succeeded.
    pub fn is_success(&self, settings: &ProvisioningSettings) -> bool {
        self.readme.is_success()
            && self.branch_protection
            && (!settings.notification_issue || self.notification_issue.is_some())
    }
}

/// Runs the setup sequence for newly created public repositories.
///
/// # Behavior
///
/// 1. Ensures `README.md` exists, writing a placeholder only when it is missing
/// 2. Re-reads the repository to resolve its current default branch
/// 3. Applies the fixed protection policy to that branch
/// 4. Optionally opens an issue summarising steps 1-3
///
/// # Error Handling
///
/// - A failed step is logged and recorded in the report
/// - Later steps still run, except that protection needs a resolved branch
/// - No retries
pub struct RepositoryProvisioner {
    /// GitHub client for API operations
    client: Arc<dyn RepositoryClient>,
    settings: ProvisioningSettings,
}

impl RepositoryProvisioner {
    /// Creates a new RepositoryProvisioner.
    pub fn new(client: Arc<dyn RepositoryClient>, settings: ProvisioningSettings) -> Self {
        Self { client, settings }
    }

    /// Provisions a repository and reports the outcome of each step.
    #[instrument(skip(self), fields(repository = %repository))]
    pub async fn provision(&self, repository: &RepositoryRef) -> ProvisioningReport {
        info!("Provisioning repository");

        let readme = self.ensure_readme(repository).await;
        let default_branch = self.resolve_default_branch(repository).await;

        let branch_protection = match default_branch.as_deref() {
            Some(branch) => self.protect_branch(repository, branch).await,
            None => {
                warn!("Default branch unresolved, skipping branch protection");
                false
            }
        };

        let notification_issue = if self.settings.notification_issue {
            self.file_notification(repository, readme, default_branch.as_deref(), branch_protection)
                .await
        } else {
            None
        };

        let report = ProvisioningReport {
            repository: repository.clone(),
            default_branch,
            readme,
            branch_protection,
            notification_issue,
        };

        if report.is_success(&self.settings) {
            info!(
                readme = ?report.readme,
                default_branch = report.default_branch.as_deref().unwrap_or(""),
                "Provisioning complete"
            );
        } else {
            warn!(
                readme = ?report.readme,
                branch_protection = report.branch_protection,
                notification_issue = report.notification_issue.is_some(),
                "Provisioning finished with failed steps"
            );
        }

        report
    }

    async fn ensure_readme(&self, repository: &RepositoryRef) -> ReadmeOutcome {
        match self
            .client
            .get_file(&repository.owner, &repository.name, content::README_PATH)
            .await
        {
            Ok(_) => {
                info!("README already exists, skipping creation");
                return ReadmeOutcome::AlreadyExists;
            }
            Err(GitHubError::NotFound) => {}
            Err(e) => {
                warn!(error = %e, "Failed to check for an existing README");
                return ReadmeOutcome::Failed;
            }
        }

        let payload = content::readme_payload(&repository.name);
        match self
            .client
            .create_file(
                &repository.owner,
                &repository.name,
                content::README_PATH,
                &payload,
            )
            .await
        {
            Ok(()) => {
                info!("Created README");
                ReadmeOutcome::Created
            }
            Err(e) => {
                warn!(error = %e, "Failed to create README");
                ReadmeOutcome::Failed
            }
        }
    }

    async fn resolve_default_branch(&self, repository: &RepositoryRef) -> Option<String> {
        match self
            .client
            .get_repository(&repository.owner, &repository.name)
            .await
        {
            Ok(repo) => match repo.default_branch() {
                Some(branch) => {
                    info!(default_branch = branch, "Resolved default branch");
                    Some(branch.to_string())
                }
                None => {
                    warn!("Repository has no default branch");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "Failed to fetch repository metadata");
                None
            }
        }
    }

    async fn protect_branch(&self, repository: &RepositoryRef, branch: &str) -> bool {
        let rules = policy::default_branch_protection();
        match self
            .client
            .update_branch_protection(&repository.owner, &repository.name, branch, &rules)
            .await
        {
            Ok(()) => {
                info!(branch = branch, "Branch protection enabled");
                true
            }
            Err(e) => {
                warn!(branch = branch, error = %e, "Failed to enable branch protection");
                false
            }
        }
    }

    async fn file_notification(
        &self,
        repository: &RepositoryRef,
        readme: ReadmeOutcome,
        default_branch: Option<&str>,
        branch_protection: bool,
    ) -> Option<Url> {
        let payload =
            content::notification_issue(repository, readme, default_branch, branch_protection);
        match self
            .client
            .create_issue(&repository.owner, &repository.name, &payload)
            .await
        {
            Ok(issue) => Some(issue.html_url),
            Err(e) => {
                warn!(error = %e, "Failed to create notification issue");
                None
            }
        }
    }
}
