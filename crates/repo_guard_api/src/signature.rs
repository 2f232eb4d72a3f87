//! Webhook signature verification
//!
//! GitHub signs each delivery with HMAC-SHA256 over the raw request body, keyed
//! with the webhook secret, and sends the result as
//! `X-Hub-Signature-256: sha256=<hex digest>`.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use thiserror::Error;

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;

/// Header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

const SIGNATURE_PREFIX: &str = "sha256=";

type HmacSha256 = Hmac<Sha256>;

/// Why a delivery signature was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Missing X-Hub-Signature-256 header")]
    Missing,

    #[error("Signature header must start with 'sha256='")]
    MalformedHeader,

    #[error("Signature is not valid hex")]
    InvalidHex,

    #[error("Signature does not match payload")]
    Mismatch,
}

/// Verifies delivery signatures against the shared webhook secret.
pub struct SignatureVerifier {
    secret: SecretString,
}

impl SignatureVerifier {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Checks `signature_header` against the HMAC of `body`.
    ///
    /// The digest comparison is constant-time.
    pub fn verify(&self, body: &[u8], signature_header: Option<&str>) -> Result<(), SignatureError> {
        let header = signature_header.ok_or(SignatureError::Missing)?;
        let hex_part = header
            .strip_prefix(SIGNATURE_PREFIX)
            .ok_or(SignatureError::MalformedHeader)?;
        let received = hex::decode(hex_part).map_err(|_| SignatureError::InvalidHex)?;

        self.mac(body)
            .verify_slice(&received)
            .map_err(|_| SignatureError::Mismatch)
    }

    /// Computes the header value GitHub would send for `body`.
    pub fn sign(&self, body: &[u8]) -> String {
        let digest = self.mac(body).finalize().into_bytes();
        format!("{}{}", SIGNATURE_PREFIX, hex::encode(digest))
    }

    fn mac(&self, body: &[u8]) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(body);
        mac
    }
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier").finish_non_exhaustive()
    }
}
