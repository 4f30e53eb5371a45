//! Infrastructure layer for jcl-optimizer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod export;
pub mod gemini;
pub mod secrets;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_BASE_URL, FileAnalysisConfig, FileConfig,
    FileGeminiConfig, FileSecretsConfig, FileServerConfig,
};
pub use export::{ExportError, MarkdownReportExporter};
pub use gemini::GeminiGateway;
pub use secrets::FigmentSecretStore;
