use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while reading an inbound webhook delivery.
///
/// Provisioning itself never fails; step failures are recorded in the
/// [`ProvisioningReport`](crate::ProvisioningReport) instead.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Webhook payload is not valid JSON or is missing required fields: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Webhook payload field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}
