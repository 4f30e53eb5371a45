//! LLM Gateway port
//!
//! Defines the interface for communicating with the remote generation service.

use async_trait::async_trait;
use jclopt_domain::{Credential, GenerationSettings, Model, ModelInfo};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// The variants exist for logging; callers of the analysis use case only see
/// the rendered message.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Empty response: {0}")]
    EmptyResponse(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One generation call: a finished prompt plus its sampling parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: Model,
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, settings: &GenerationSettings) -> Self {
        Self {
            model: settings.model.clone(),
            prompt: prompt.into(),
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the generation
/// service. Implementations (adapters) live in the infrastructure layer.
/// The credential travels with each call; gateways hold no session state.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Issue one generation request and return the generated text
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerationRequest,
    ) -> Result<String, GatewayError>;

    /// List every model the credential can see
    async fn available_models(&self, credential: &Credential)
    -> Result<Vec<ModelInfo>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_copies_settings() {
        let settings = GenerationSettings::default().with_model(Model::Gemini25Pro);
        let request = GenerationRequest::new("prompt", &settings);
        assert_eq!(request.model, Model::Gemini25Pro);
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_output_tokens, 8000);
        assert_eq!(request.prompt, "prompt");
    }

    #[test]
    fn test_api_error_display_keeps_message() {
        let error = GatewayError::Api {
            status: 429,
            message: "Quota exceeded".to_string(),
        };
        assert_eq!(error.to_string(), "API error (429): Quota exceeded");
    }
}
