//! Application state.

use super::session::SessionStore;
use jclopt_application::{AnalyzeJclUseCase, LlmGateway};
use jclopt_domain::{Credential, GenerationSettings};
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<AnalyzeJclUseCase<dyn LlmGateway>>,
    pub sessions: SessionStore,
}

impl AppState {
    /// `configured` is the credential resolved from deployment configuration,
    /// if any; every new session starts with it. Sessions untouched for
    /// `session_ttl` are dropped.
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        settings: GenerationSettings,
        configured: Option<Credential>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            analyzer: Arc::new(AnalyzeJclUseCase::new(gateway, settings)),
            sessions: SessionStore::new(configured, session_ttl),
        }
    }
}
