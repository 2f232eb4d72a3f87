//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making token-authenticated requests to GitHub.
//! It covers the handful of repository operations needed to set up a freshly
//! created repository: reading repository metadata, reading and creating files,
//! protecting a branch and filing issues.
//!
//! Consumers should depend on the [`RepositoryClient`] trait rather than on
//! [`GitHubClient`] directly so that the GitHub API can be replaced in tests.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod branch_protection;
pub use branch_protection::{
    BranchProtectionRules, DismissalRestrictions, PushRestrictions, RequiredPullRequestReviews,
    RequiredStatusChecks,
};

pub mod contents;
pub use contents::{CreateFilePayload, FileContent};

pub mod issue;
pub use issue::{CreateIssuePayload, Issue};

pub mod models;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Default base URI of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Everything except the RFC 3986 unreserved characters is encoded in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds `/repos/{owner}/{repo}/{segments...}` with every segment percent-encoded.
///
/// Branch names may contain characters such as `#` or `?` that would otherwise
/// end the path early.
fn repo_route(owner: &str, repo: &str, segments: &[&str]) -> String {
    let mut route = String::from("/repos");
    for segment in [owner, repo].iter().chain(segments) {
        route.push('/');
        route.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    }
    route
}

/// Route segments for a file in the Contents API. `/` in `path` separates directories.
fn contents_segments(path: &str) -> Vec<&str> {
    std::iter::once("contents").chain(path.split('/')).collect()
}

/// Trait for the repository operations performed after a repository is created.
///
/// All methods map a 404 answer to [`Error::NotFound`] and any other
/// non-success answer to [`Error::ApiError`].
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Fetches details for a specific repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<models::Repository, Error>;

    /// Fetches the metadata of a single file.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the file does not exist on the default branch.
    async fn get_file(&self, owner: &str, repo: &str, path: &str) -> Result<FileContent, Error>;

    /// Creates a new file with a single commit.
    async fn create_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        payload: &CreateFilePayload,
    ) -> Result<(), Error>;

    /// Replaces the protection rules of a branch.
    async fn update_branch_protection(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        rules: &BranchProtectionRules,
    ) -> Result<(), Error>;

    /// Opens a new issue.
    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        payload: &CreateIssuePayload,
    ) -> Result<Issue, Error>;
}

/// A client for interacting with the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an authenticated `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build the `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<models::Repository, Error> {
        let route = repo_route(owner, repo, &[]);
        let result: OctocrabResult<models::Repository> =
            self.client.get(route, None::<&()>).await;
        match result {
            Ok(r) => {
                debug!(
                    full_name = r.full_name(),
                    default_branch = r.default_branch().unwrap_or(""),
                    "Retrieved repository metadata"
                );
                Ok(r)
            }
            Err(e) => Err(map_octocrab_error("Failed to get repository", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, path = %path))]
    async fn get_file(&self, owner: &str, repo: &str, path: &str) -> Result<FileContent, Error> {
        let route = repo_route(owner, repo, &contents_segments(path));
        let result: OctocrabResult<FileContent> = self.client.get(route, None::<&()>).await;
        result.map_err(|e| map_octocrab_error("Failed to get file contents", e))
    }

    #[instrument(skip(self, payload), fields(owner = %owner, repo = %repo, path = %path))]
    async fn create_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        payload: &CreateFilePayload,
    ) -> Result<(), Error> {
        let route = repo_route(owner, repo, &contents_segments(path));
        let result: OctocrabResult<serde_json::Value> =
            self.client.put(route, Some(payload)).await;
        match result {
            Ok(_) => {
                info!("Created file");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to create file", e)),
        }
    }

    #[instrument(skip(self, rules), fields(owner = %owner, repo = %repo, branch = %branch))]
    async fn update_branch_protection(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        rules: &BranchProtectionRules,
    ) -> Result<(), Error> {
        let route = repo_route(owner, repo, &["branches", branch, "protection"]);
        let result: OctocrabResult<serde_json::Value> = self.client.put(route, Some(rules)).await;
        match result {
            Ok(_) => {
                info!("Updated branch protection");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to update branch protection", e)),
        }
    }

    #[instrument(skip(self, payload), fields(owner = %owner, repo = %repo))]
    async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        payload: &CreateIssuePayload,
    ) -> Result<Issue, Error> {
        let route = repo_route(owner, repo, &["issues"]);
        let result: OctocrabResult<Issue> = self.client.post(route, Some(payload)).await;
        match result {
            Ok(issue) => {
                info!(issue_number = issue.number, "Created issue");
                Ok(issue)
            }
            Err(e) => Err(map_octocrab_error("Failed to create issue", e)),
        }
    }
}

/// Creates an `Octocrab` client that authenticates with a bearer token.
///
/// # Arguments
///
/// * `token` - A personal access token or installation token.
/// * `base_uri` - Base URI of the REST API. `None` targets [`DEFAULT_API_URL`].
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URI is invalid or the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, Error};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let octocrab = create_token_client("ghp_example", None)?;
///     let client = GitHubClient::new(octocrab);
///     Ok(())
/// }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());

    if let Some(uri) = base_uri {
        builder = builder.base_uri(uri).map_err(|e| {
            error!(base_uri = uri, error = %e, "Invalid GitHub API base URI");
            Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", uri, e))
        })?;
    }

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client with token credentials");
        Error::AuthError("Failed to build the GitHub client.".to_string())
    })
}

/// Logs an octocrab failure and translates it into this crate's [`Error`].
///
/// A 404 from GitHub is expected in several flows (e.g. checking whether a file
/// exists) and is only logged at debug level.
fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let status = source.status_code;
            if status == http::StatusCode::NOT_FOUND {
                debug!(error_message = source.message, "{}. Resource not found", message);
                return Error::NotFound;
            }

            error!(
                status = status.as_u16(),
                error_message = source.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            Error::ApiError {
                status: status.as_u16(),
                message: source.message.clone(),
            }
        }
        octocrab::Error::UriParse { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to parse URI.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::Uri { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}, Failed to parse URI.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::InvalidHeaderValue { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. One of the header values was invalid.",
                message
            );
            Error::InvalidResponse
        }
        octocrab::Error::InvalidUtf8 { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. The message wasn't valid UTF-8.",
                message,
            );
            Error::InvalidResponse
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::InvalidResponse
        }
    }
}
