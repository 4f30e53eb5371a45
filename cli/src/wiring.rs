//! Dependency injection: configuration, adapters and credential resolution

use anyhow::{Context, Result, anyhow};
use jclopt_application::{AnalysisConfig, CredentialResolution, ResolveCredentialUseCase};
use jclopt_infrastructure::{ConfigLoader, FigmentSecretStore, FileConfig, GeminiGateway};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Load and validate configuration (defaults only with `no_config`)
pub fn load_config(path: Option<&PathBuf>, no_config: bool) -> Result<FileConfig> {
    let config = if no_config {
        debug!("Configuration files disabled");
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(path).map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Build the Gemini adapter from configuration
pub fn gemini_gateway(config: &FileConfig, analysis: &AnalysisConfig) -> Result<Arc<GeminiGateway>> {
    let gateway = GeminiGateway::new(config.gemini.base_url.clone(), analysis.timeout)
        .context("Failed to create Gemini client")?;
    Ok(Arc::new(gateway))
}

/// Credential resolver over the secrets file and environment
pub fn credential_resolver(
    config: &FileConfig,
    analysis: &AnalysisConfig,
    secrets_override: Option<&Path>,
) -> ResolveCredentialUseCase<FigmentSecretStore> {
    let path = secrets_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.secrets.path.clone());
    debug!(path = %path.display(), "Looking up API key");

    ResolveCredentialUseCase::new(
        Arc::new(FigmentSecretStore::new(path)),
        analysis.secret_key.clone(),
    )
}

/// Resolve the API key from the secrets file and environment
pub fn resolve_credential(
    config: &FileConfig,
    analysis: &AnalysisConfig,
    secrets_override: Option<&Path>,
) -> CredentialResolution {
    credential_resolver(config, analysis, secrets_override).execute()
}

/// A key given on the command line wins over configuration
pub fn credential_from_flag_or_config(
    flag: Option<&str>,
    resolver: &ResolveCredentialUseCase<FigmentSecretStore>,
) -> CredentialResolution {
    if let Some(credential) = flag.and_then(|key| resolver.accept_entered(key)) {
        info!("Using API key from command line");
        return CredentialResolution::Resolved(credential);
    }
    resolver.execute()
}
