//! Analyze JCL use case
//!
//! Validates the session's credential and input, wraps the input in the
//! optimization prompt and issues exactly one generation request.

use crate::ports::llm_gateway::{GenerationRequest, LlmGateway};
use crate::ports::progress::{AnalysisProgress, NoProgress};
use jclopt_domain::{
    AnalysisPromptTemplate, Credential, GenerationSettings, JobControlText, ReportText,
    first_line_preview,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Guidance shown alongside a remote call failure
pub const TROUBLESHOOTING: [&str; 3] = [
    "Check your API key is correct",
    "Verify you have an internet connection",
    "Make sure the API key has quota remaining",
];

/// Errors surfaced to the user. All are recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Please enter your Google Gemini API key")]
    MissingCredential,

    #[error("Please select a JCL sample or enter custom JCL")]
    MissingInput,

    #[error("Error occurred: {0}")]
    RemoteCallFailed(String),
}

impl AnalyzeError {
    /// Troubleshooting steps to show with this error (empty when none apply)
    pub fn troubleshooting(&self) -> &'static [&'static str] {
        match self {
            AnalyzeError::RemoteCallFailed(_) => &TROUBLESHOOTING,
            _ => &[],
        }
    }

    /// Check if this error came from the remote endpoint
    pub fn is_remote(&self) -> bool {
        matches!(self, AnalyzeError::RemoteCallFailed(_))
    }
}

/// Use case for running one JCL optimization analysis
///
/// No caching: every call that passes validation issues a fresh remote call.
/// No retries: a failed call is reported immediately.
pub struct AnalyzeJclUseCase<G: LlmGateway + ?Sized> {
    gateway: Arc<G>,
    settings: GenerationSettings,
}

impl<G: LlmGateway + ?Sized> AnalyzeJclUseCase<G> {
    pub fn new(gateway: Arc<G>, settings: GenerationSettings) -> Self {
        Self { gateway, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        credential: Option<&Credential>,
        input_text: &str,
    ) -> Result<ReportText, AnalyzeError> {
        self.execute_with_progress(credential, input_text, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        credential: Option<&Credential>,
        input_text: &str,
        progress: &dyn AnalysisProgress,
    ) -> Result<ReportText, AnalyzeError> {
        let Some(credential) = credential else {
            debug!("Rejecting analysis: no credential");
            return Err(AnalyzeError::MissingCredential);
        };

        let jcl = JobControlText::new(input_text).map_err(|e| {
            debug!("Rejecting analysis: {}", e);
            AnalyzeError::MissingInput
        })?;

        info!(
            model = %self.settings.model,
            lines = jcl.line_count(),
            first_line = %first_line_preview(jcl.content(), 60),
            "Requesting JCL optimization analysis"
        );

        let prompt = AnalysisPromptTemplate::optimization_report(jcl.content());
        let request = GenerationRequest::new(prompt, &self.settings);

        progress.on_request_start(&request.model);
        let result = self.gateway.generate(credential, &request).await;
        progress.on_request_complete(result.is_ok());

        match result {
            Ok(text) => {
                info!(bytes = text.len(), "Analysis complete");
                Ok(ReportText::new(text))
            }
            Err(e) => {
                warn!("Analysis failed: {}", e);
                Err(AnalyzeError::RemoteCallFailed(e.to_string()))
            }
        }
    }
}
