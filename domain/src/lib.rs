//! Domain layer for jcl-optimizer
//!
//! This crate contains the value objects that describe one analysis
//! round-trip. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Credential**: the API key, resolved once per session and never printed
//! - **JobControlText**: submitted JCL; must be non-blank and not the sample placeholder
//! - **ReportText**: the markdown the remote model returns, kept verbatim
//! - **SessionContext**: explicit per-session state for the interactive surface

pub mod analysis;
pub mod core;
pub mod prompt;
pub mod samples;
pub mod session;

// Re-export commonly used types
pub use analysis::{
    report::{REPORT_CONTENT_TYPE, REPORT_FILE_NAME, ReportExport, ReportText},
    settings::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, GenerationSettings},
};
pub use core::{
    credential::{Credential, CredentialSource},
    error::DomainError,
    job_control::{JobControlText, PLACEHOLDER_SENTINEL},
    model::Model,
    model_info::{GENERATE_CONTENT, ModelInfo},
    string::first_line_preview,
};
pub use prompt::AnalysisPromptTemplate;
pub use samples::JclSample;
pub use session::context::{CompletedReport, SessionContext};
