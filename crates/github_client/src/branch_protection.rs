//! Branch protection domain types.
//!
//! This module contains the request body for GitHub's
//! `PUT /repos/{owner}/{repo}/branches/{branch}/protection` endpoint.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "branch_protection_tests.rs"]
mod tests;

/// Branch protection rules applied to a single branch.
///
/// GitHub requires all four top-level keys to be present in the request. A `None`
/// value is therefore serialized as an explicit `null`, which GitHub reads as
/// "disable this rule".
///
/// # Examples
///
/// ```rust
/// use github_client::{BranchProtectionRules, RequiredPullRequestReviews, RequiredStatusChecks};
///
/// let rules = BranchProtectionRules {
///     required_status_checks: Some(RequiredStatusChecks {
///         strict: true,
///         contexts: vec![],
///     }),
///     enforce_admins: Some(true),
///     required_pull_request_reviews: Some(RequiredPullRequestReviews {
///         dismissal_restrictions: Some(Default::default()),
///         dismiss_stale_reviews: true,
///         require_code_owner_reviews: true,
///         required_approving_review_count: 1,
///     }),
///     restrictions: None,
/// };
///
/// let body = serde_json::to_value(&rules).unwrap();
/// assert!(body["restrictions"].is_null());
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct BranchProtectionRules {
    /// Status checks that must pass before merging
    pub required_status_checks: Option<RequiredStatusChecks>,
    /// Whether the rules also apply to repository administrators
    pub enforce_admins: Option<bool>,
    /// Pull request review requirements
    pub required_pull_request_reviews: Option<RequiredPullRequestReviews>,
    /// Users, teams and apps allowed to push. `None` means no push restrictions.
    pub restrictions: Option<PushRestrictions>,
}

/// Required status check settings.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct RequiredStatusChecks {
    /// Require branches to be up to date before merging
    pub strict: bool,
    /// Names of the status checks that must pass
    pub contexts: Vec<String>,
}

/// Pull request review requirements.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct RequiredPullRequestReviews {
    /// Who may dismiss reviews. An empty object means nobody is singled out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissal_restrictions: Option<DismissalRestrictions>,
    /// Dismiss approving reviews when new commits are pushed
    pub dismiss_stale_reviews: bool,
    /// Require a review from a code owner
    pub require_code_owner_reviews: bool,
    /// Number of approving reviews required before merging
    pub required_approving_review_count: u32,
}

/// Users and teams allowed to dismiss pull request reviews.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct DismissalRestrictions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
}

/// Users, teams and apps allowed to push to the protected branch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct PushRestrictions {
    pub users: Vec<String>,
    pub teams: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apps: Vec<String>,
}
