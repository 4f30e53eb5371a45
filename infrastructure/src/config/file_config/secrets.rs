//! Secrets location from TOML (`[secrets]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local secrets file
pub const DEFAULT_SECRETS_PATH: &str = ".jclopt/secrets.toml";

/// Raw secrets configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSecretsConfig {
    /// Path to a `key = "value"` TOML file
    pub path: PathBuf,
}

impl Default for FileSecretsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SECRETS_PATH),
        }
    }
}
