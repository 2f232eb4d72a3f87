//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. Callers mostly care about one distinction: whether the
//! requested resource was absent ([`Error::NotFound`]) or whether the call failed for some
//! other reason.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.get_file("octo-org", "hello-world", "README.md").await {
///     Ok(file) => println!("README exists with sha {}", file.sha),
///     Err(Error::NotFound) => println!("README is missing"),
///     Err(err) => eprintln!("Lookup failed: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub answered the request with a non-success status other than 404.
    ///
    /// The status code and the `message` field of GitHub's error body are kept so that
    /// callers can log them.
    #[error("GitHub API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// GitHub client initialization failure.
    ///
    /// This error occurs when the token or the API base URI cannot be used to build
    /// an HTTP client.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The request never produced a usable GitHub response.
    ///
    /// Covers transport failures, malformed URIs and bodies that could not be decoded.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status code,
    /// indicating that the requested resource (repository, file, branch, etc.)
    /// does not exist or is not accessible with the current authentication.
    #[error("Resource not found")]
    NotFound,
}

