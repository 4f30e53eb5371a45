//! Credential value object

use super::error::DomainError;

/// An API key for the remote generation service (Value Object)
///
/// Held in memory only. The token is opaque: nothing here checks that the
/// remote service will accept it. `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Create a credential, rejecting empty or whitespace-only tokens.
    ///
    /// Surrounding whitespace (a common copy/paste artifact) is trimmed.
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self {
            token: trimmed.to_string(),
        })
    }

    /// Try to create a credential, returning None if the token is empty
    pub fn try_new(token: impl Into<String>) -> Option<Self> {
        Self::new(token).ok()
    }

    /// Expose the raw token for use in an outgoing request
    pub fn expose(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(****)")
    }
}

/// Where a session's credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Deployment configuration (secrets file or environment)
    Configuration,
    /// Typed in by the user
    UserEntry,
}
