//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analysis;
mod gemini;
mod secrets;
mod server;

pub use analysis::FileAnalysisConfig;
pub use gemini::{DEFAULT_BASE_URL, FileGeminiConfig};
pub use secrets::{DEFAULT_SECRETS_PATH, FileSecretsConfig};
pub use server::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SESSION_TTL_SECONDS, FileServerConfig};

use jclopt_application::AnalysisConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("max_output_tokens must be greater than 0")]
    InvalidMaxOutputTokens,

    #[error("gemini.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("server.session_ttl_seconds cannot be 0")]
    InvalidSessionTtl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model and sampling parameters
    pub analysis: FileAnalysisConfig,
    /// Remote endpoint
    pub gemini: FileGeminiConfig,
    /// Where the API key may be configured
    pub secrets: FileSecretsConfig,
    /// Web form listener
    pub server: FileServerConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let analysis = &self.analysis;

        if let Some(0) = analysis.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if analysis.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if !(0.0..=2.0).contains(&analysis.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(
                analysis.temperature,
            ));
        }

        if analysis.max_output_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxOutputTokens);
        }

        if self.gemini.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.server.session_ttl_seconds == 0 {
            return Err(ConfigValidationError::InvalidSessionTtl);
        }

        Ok(())
    }

    /// Build the application-level analysis configuration
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new(self.analysis.to_settings())
            .with_timeout_seconds(self.analysis.timeout_seconds)
    }
}
