//! Issue domain types.

use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;

/// Request body for `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIssuePayload {
    /// The title of the issue
    pub title: String,

    /// Markdown body of the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Labels to attach. Labels that do not exist yet are created by GitHub.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// The part of GitHub's issue representation this crate cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Repository-scoped issue number
    pub number: u64,

    /// The title of the issue
    pub title: String,

    /// User-facing URL of the issue
    pub html_url: Url,
}
