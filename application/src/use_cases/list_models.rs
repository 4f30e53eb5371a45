//! List Models use case
//!
//! Asks the remote service which models a key can see and keeps the ones
//! that can generate content.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use jclopt_domain::{Credential, ModelInfo};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while listing models
#[derive(Error, Debug)]
pub enum ListModelsError {
    #[error("Could not list models: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for listing generation-capable models
pub struct ListModelsUseCase<G: LlmGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + ?Sized> ListModelsUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Return every listed model that supports `generateContent`, in listing order
    pub async fn execute(&self, credential: &Credential) -> Result<Vec<ModelInfo>, ListModelsError> {
        let all = self.gateway.available_models(credential).await?;
        let total = all.len();

        let usable: Vec<ModelInfo> = all
            .into_iter()
            .filter(|m| {
                let keep = m.supports_generate_content();
                if !keep {
                    debug!(model = %m.name, "Skipping model without generateContent");
                }
                keep
            })
            .collect();

        info!(total, usable = usable.len(), "Listed available models");
        Ok(usable)
    }
}
