//! Repository contents domain types.
//!
//! This module contains types for reading and writing single files through the
//! GitHub Contents API.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "contents_tests.rs"]
mod tests;

/// Metadata for a file returned by `GET /repos/{owner}/{repo}/contents/{path}`.
///
/// Only the fields needed to decide whether a file exists are kept; the
/// encoded file body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// File name (e.g., "README.md")
    pub name: String,

    /// Full path within repository
    pub path: String,

    /// Git blob SHA of the file
    pub sha: String,

    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}

/// Request body for `PUT /repos/{owner}/{repo}/contents/{path}`.
///
/// # Examples
///
/// ```rust
/// use github_client::CreateFilePayload;
///
/// let payload = CreateFilePayload::new("Add README", "# hello\n");
/// assert_eq!(payload.content, "IyBoZWxsbwo=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFilePayload {
    /// Commit message
    pub message: String,

    /// File body, base64 encoded
    pub content: String,
}

impl CreateFilePayload {
    /// Creates a payload from a commit message and the raw (unencoded) file body.
    pub fn new(message: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        Self {
            message: message.into(),
            content: STANDARD.encode(content),
        }
    }
}
