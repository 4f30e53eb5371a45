//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Credential cannot be empty")]
    EmptyCredential,

    #[error("Job control text cannot be empty")]
    EmptyJobControl,

    #[error("Job control text is still the sample placeholder")]
    PlaceholderJobControl,

    #[error("Invalid generation settings: {0}")]
    InvalidSettings(String),

    #[error("Unknown sample: {0}")]
    UnknownSample(String),
}

impl DomainError {
    /// Check if this error means no usable job control text was supplied
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyJobControl | DomainError::PlaceholderJobControl
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sample_display() {
        let error = DomainError::UnknownSample("payroll".to_string());
        assert_eq!(error.to_string(), "Unknown sample: payroll");
    }

    #[test]
    fn test_is_missing_input_check() {
        assert!(DomainError::EmptyJobControl.is_missing_input());
        assert!(DomainError::PlaceholderJobControl.is_missing_input());
        assert!(!DomainError::EmptyCredential.is_missing_input());
        assert!(!DomainError::InvalidSettings("x".to_string()).is_missing_input());
    }
}
