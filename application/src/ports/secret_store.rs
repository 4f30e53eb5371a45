//! Secret store port
//!
//! Optional named-secret lookup backed by deployment configuration.

use thiserror::Error;

/// Errors that can occur while reading secrets
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Secret store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed secret store: {0}")]
    Malformed(String),
}

/// Read-only lookup of named secrets
pub trait SecretStore: Send + Sync {
    /// Look up a secret. `Ok(None)` means the secret is not configured.
    fn get(&self, key: &str) -> Result<Option<String>, SecretStoreError>;
}

/// Store with no secrets, for deployments that always ask the user
pub struct NoSecrets;

impl SecretStore for NoSecrets {
    fn get(&self, _key: &str) -> Result<Option<String>, SecretStoreError> {
        Ok(None)
    }
}
