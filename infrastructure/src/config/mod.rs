//! Configuration file loading for jcl-optimizer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./jclopt.toml` or `./.jclopt.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/jcl-optimizer/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SECRETS_PATH,
    DEFAULT_SESSION_TTL_SECONDS,
    FileAnalysisConfig, FileConfig, FileGeminiConfig, FileSecretsConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
