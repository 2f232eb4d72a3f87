//! # Models
//!
//! Data models for the GitHub resources this crate reads. They keep only the
//! fields the rest of the workspace uses and ignore everything else GitHub sends.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub repository as returned by `GET /repos/{owner}/{repo}`.
///
/// # Examples
///
/// ```rust
/// use github_client::models::Repository;
///
/// let repo = Repository::new("my-repo", "owner/my-repo", Some("main"));
///
/// assert_eq!(repo.name(), "my-repo");
/// assert_eq!(repo.default_branch(), Some("main"));
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Repository {
    /// The name of the repository
    name: String,
    /// The full name of the repository (owner/name)
    full_name: String,
    /// The branch GitHub currently treats as the default
    #[serde(default)]
    default_branch: Option<String>,
}

impl Repository {
    /// Creates a new Repository instance.
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        default_branch: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            default_branch: default_branch.map(str::to_string),
        }
    }

    /// Returns the name of the repository (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full name of the repository (owner/name).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the default branch, if GitHub reported one.
    ///
    /// An empty string is treated the same as a missing value.
    pub fn default_branch(&self) -> Option<&str> {
        self.default_branch.as_deref().filter(|b| !b.is_empty())
    }
}
