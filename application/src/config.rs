//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//! which model answers, with what sampling parameters, where the credential is
//! looked up and how long a remote call may take.

use jclopt_domain::{DomainError, GenerationSettings};
use std::time::Duration;

/// Name of the secret holding the API key
pub const DEFAULT_SECRET_KEY: &str = "GOOGLE_API_KEY";

/// Analysis behavior configuration.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Model and sampling parameters attached to every request.
    pub settings: GenerationSettings,
    /// Secret name the credential resolver looks up.
    pub secret_key: String,
    /// Maximum time to wait for the remote endpoint. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            settings: GenerationSettings::default(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            timeout: None,
        }
    }
}

impl AnalysisConfig {
    pub fn new(settings: GenerationSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Sets the timeout from an optional number of seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.settings.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.secret_key, "GOOGLE_API_KEY");
        assert!(config.timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_from_seconds() {
        let config = AnalysisConfig::default().with_timeout_seconds(Some(45));
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
        let config = config.with_timeout_seconds(None);
        assert!(config.timeout.is_none());
    }
}
