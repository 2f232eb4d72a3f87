//! HTTP response type definitions
//!
//! HTTP response types are created from domain results via `From`.
//! The webhook response uses snake_case keys to match GitHub's own payloads.

use repo_guard_core::{ProvisioningReport, ReadmeOutcome};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;

/// Summary returned after provisioning a public repository.
///
/// # Example
///
/// ```json
/// {
///   "repository": "acme/widgets",
///   "default_branch": "main",
///   "readme": "created",
///   "readme_created": true,
///   "branch_protection": true,
///   "notification_issue": true,
///   "notification_issue_url": "https://github.com/acme/widgets/issues/1"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    /// `owner/name` of the provisioned repository
    pub repository: String,

    /// Default branch resolved from the API, `null` when the lookup failed
    pub default_branch: Option<String>,

    /// Detailed outcome of the README step
    pub readme: ReadmeOutcome,

    /// True when the repository has a README (created now or already present)
    pub readme_created: bool,

    /// True when branch protection was applied
    pub branch_protection: bool,

    /// True when the notification issue was created
    pub notification_issue: bool,

    /// Browser URL of the notification issue
    pub notification_issue_url: Option<String>,
}

impl From<ProvisioningReport> for WebhookResponse {
    fn from(report: ProvisioningReport) -> Self {
        Self {
            repository: report.repository.full_name(),
            default_branch: report.default_branch,
            readme: report.readme,
            readme_created: report.readme.is_success(),
            branch_protection: report.branch_protection,
            notification_issue: report.notification_issue.is_some(),
            notification_issue_url: report.notification_issue.map(|url| url.to_string()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status: "healthy" or "unhealthy"
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,
}
