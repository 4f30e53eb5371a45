//! Job control text value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Substring carried by the "no selection made" placeholder text.
///
/// Input containing it is treated as if nothing had been entered.
pub const PLACEHOLDER_SENTINEL: &str = "Select a sample";

/// Job control text submitted for analysis (Value Object)
///
/// The content is opaque; the only guarantees are that it is not blank and
/// is not the placeholder shown before a sample is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobControlText {
    content: String,
}

impl JobControlText {
    /// Validate and wrap job control text
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyJobControl);
        }
        if content.contains(PLACEHOLDER_SENTINEL) {
            return Err(DomainError::PlaceholderJobControl);
        }
        Ok(Self { content })
    }

    /// Try to create job control text, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        Self::new(content).ok()
    }

    /// Get the text content (unmodified)
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines, used for log context
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

impl std::fmt::Display for JobControlText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
