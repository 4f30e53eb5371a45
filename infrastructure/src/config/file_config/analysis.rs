//! Analysis configuration from TOML (`[analysis]` section)

use jclopt_domain::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, GenerationSettings, Model};
use serde::{Deserialize, Serialize};

/// Raw analysis configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Model name (`gemini-2.5-flash`, `models/gemini-2.5-pro`, ...)
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Timeout in seconds for the remote call; unset waits indefinitely
    pub timeout_seconds: Option<u64>,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            timeout_seconds: None,
        }
    }
}

impl FileAnalysisConfig {
    /// Convert to the domain's generation settings
    pub fn to_settings(&self) -> GenerationSettings {
        GenerationSettings::default()
            .with_model(Model::from_resource_name(self.model.trim()))
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
    }
}
