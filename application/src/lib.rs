//! Application layer for jcl-optimizer
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnalysisConfig, DEFAULT_SECRET_KEY};
pub use ports::{
    llm_gateway::{GatewayError, GenerationRequest, LlmGateway},
    progress::{AnalysisProgress, NoProgress},
    secret_store::{NoSecrets, SecretStore, SecretStoreError},
};
pub use use_cases::analyze_jcl::{AnalyzeError, AnalyzeJclUseCase, TROUBLESHOOTING};
pub use use_cases::list_models::{ListModelsError, ListModelsUseCase};
pub use use_cases::resolve_credential::{CredentialResolution, ResolveCredentialUseCase};
