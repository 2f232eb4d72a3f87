//! Inbound GitHub `repository` webhook events.
//!
//! A delivery is classified in three stages so that unrelated events are never
//! parsed beyond what is needed to reject them:
//!
//! 1. the `X-GitHub-Event` header must be `repository`,
//! 2. the `action` field must be `created`,
//! 3. only then is the full repository payload read.

use serde::Deserialize;
use tracing::debug;

use crate::EventError;

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

/// Value of the `X-GitHub-Event` header for repository lifecycle events.
pub const REPOSITORY_EVENT: &str = "repository";

/// Value of the payload `action` field when a repository was just created.
pub const CREATED_ACTION: &str = "created";

/// Owner of a repository as reported in the webhook payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// The `repository` object of a repository event payload.
///
/// `default_branch` is informational only: the branch that gets protected is
/// always re-read from the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryPayload {
    pub name: String,
    pub owner: Owner,
    #[serde(default)]
    pub url: Option<String>,
    pub private: bool,
    #[serde(default)]
    pub default_branch: Option<String>,
}

/// Payload of a `repository` webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryEventPayload {
    pub action: String,
    pub repository: RepositoryPayload,
}

/// Minimal struct used only to read `action` before full deserialisation.
#[derive(Deserialize)]
struct EventEnvelope {
    action: String,
}

/// Identifies a repository by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns `owner/name`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Why a delivery was acknowledged without doing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The `X-GitHub-Event` header was missing or named another event.
    UnsupportedEvent(Option<String>),
    /// A repository event with an action other than `created`.
    UnsupportedAction(String),
}

/// What to do with a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDisposition {
    /// Acknowledge and stop.
    Ignore(IgnoreReason),
    /// A private repository was created; acknowledge without touching it.
    SkipPrivate(RepositoryEventPayload),
    /// A public repository was created; run the provisioning steps.
    Provision(RepositoryEventPayload),
}

impl RepositoryEventPayload {
    /// Returns the owner/name pair of the repository.
    pub fn repository_ref(&self) -> RepositoryRef {
        RepositoryRef::new(&self.repository.owner.login, &self.repository.name)
    }
}

/// Classifies a webhook delivery from its event header and raw body.
///
/// # Errors
///
/// Returns `EventError::InvalidPayload` if a `repository` event body is not JSON,
/// has no `action`, or (for `created`) lacks the repository fields. Returns
/// `EventError::EmptyField` if the owner login or repository name is empty.
pub fn classify_event(event_type: Option<&str>, body: &[u8]) -> Result<EventDisposition, EventError> {
    if event_type != Some(REPOSITORY_EVENT) {
        debug!(event_type = ?event_type, "Ignoring non-repository event");
        return Ok(EventDisposition::Ignore(IgnoreReason::UnsupportedEvent(
            event_type.map(str::to_string),
        )));
    }

    let envelope: EventEnvelope = serde_json::from_slice(body)?;
    if envelope.action != CREATED_ACTION {
        debug!(action = %envelope.action, "Ignoring repository event action");
        return Ok(EventDisposition::Ignore(IgnoreReason::UnsupportedAction(
            envelope.action,
        )));
    }

    let payload: RepositoryEventPayload = serde_json::from_slice(body)?;
    if payload.repository.owner.login.is_empty() {
        return Err(EventError::EmptyField {
            field: "repository.owner.login",
        });
    }
    if payload.repository.name.is_empty() {
        return Err(EventError::EmptyField {
            field: "repository.name",
        });
    }

    if payload.repository.private {
        Ok(EventDisposition::SkipPrivate(payload))
    } else {
        Ok(EventDisposition::Provision(payload))
    }
}
