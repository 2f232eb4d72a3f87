//! The fixed branch protection policy applied to every new public repository.

use github_client::{
    BranchProtectionRules, DismissalRestrictions, RequiredPullRequestReviews,
    RequiredStatusChecks,
};

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;

/// Number of approving reviews a pull request needs before it can be merged.
pub const REQUIRED_APPROVING_REVIEWS: u32 = 1;

/// Returns the protection rules applied to the default branch.
///
/// - branches must be up to date with the base before merging (no named checks yet)
/// - administrators are bound by the rules too
/// - one approving review, including a code owner, and stale approvals are dismissed
/// - no push restrictions
pub fn default_branch_protection() -> BranchProtectionRules {
    BranchProtectionRules {
        required_status_checks: Some(RequiredStatusChecks {
            strict: true,
            contexts: Vec::new(),
        }),
        enforce_admins: Some(true),
        required_pull_request_reviews: Some(RequiredPullRequestReviews {
            dismissal_restrictions: Some(DismissalRestrictions::default()),
            dismiss_stale_reviews: true,
            require_code_owner_reviews: true,
            required_approving_review_count: REQUIRED_APPROVING_REVIEWS,
        }),
        restrictions: None,
    }
}
