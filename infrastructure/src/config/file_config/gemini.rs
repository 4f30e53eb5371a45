//! Gemini endpoint configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

/// Public Generative Language API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API host, without the `/v1beta` suffix
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
