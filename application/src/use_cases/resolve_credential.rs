//! Resolve Credential use case
//!
//! Finds the API key in deployment configuration, or tells the caller to ask
//! the user for one.

use crate::ports::secret_store::SecretStore;
use jclopt_domain::Credential;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of credential resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialResolution {
    /// A credential was found in configuration
    Resolved(Credential),
    /// Nothing usable was configured; the caller must collect one from the user
    NeedsInput,
}

impl CredentialResolution {
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            CredentialResolution::Resolved(credential) => Some(credential),
            CredentialResolution::NeedsInput => None,
        }
    }

    pub fn into_credential(self) -> Option<Credential> {
        match self {
            CredentialResolution::Resolved(credential) => Some(credential),
            CredentialResolution::NeedsInput => None,
        }
    }
}

/// Use case for resolving the session credential
pub struct ResolveCredentialUseCase<S: SecretStore + ?Sized> {
    store: Arc<S>,
    key: String,
}

impl<S: SecretStore + ?Sized> ResolveCredentialUseCase<S> {
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Look the credential up in the configuration store.
    ///
    /// Absence, an empty value and lookup errors all yield `NeedsInput`.
    pub fn execute(&self) -> CredentialResolution {
        match self.store.get(&self.key) {
            Ok(Some(value)) => match Credential::try_new(value) {
                Some(credential) => {
                    info!(key = %self.key, "API key configured from secrets");
                    CredentialResolution::Resolved(credential)
                }
                None => {
                    debug!(key = %self.key, "Configured secret is empty");
                    CredentialResolution::NeedsInput
                }
            },
            Ok(None) => {
                debug!(key = %self.key, "No secret configured");
                CredentialResolution::NeedsInput
            }
            Err(e) => {
                warn!(key = %self.key, "Could not read secrets: {}", e);
                CredentialResolution::NeedsInput
            }
        }
    }

    /// Accept a credential typed in by the user once it is non-empty
    pub fn accept_entered(&self, input: &str) -> Option<Credential> {
        Credential::try_new(input)
    }
}
