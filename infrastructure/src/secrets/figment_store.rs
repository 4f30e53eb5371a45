//! [`SecretStore`] adapter built on figment
//!
//! Values come from a flat `key = "value"` TOML file. An environment
//! variable with the same name overrides the file.

use figment::{
    Figment,
    error::Kind,
    providers::{Env, Format, Toml},
};
use jclopt_application::ports::secret_store::{SecretStore, SecretStoreError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Secret store reading `secrets.toml` plus environment overrides
pub struct FigmentSecretStore {
    path: PathBuf,
    use_env: bool,
}

impl FigmentSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_env: true,
        }
    }

    /// Only read the file, ignoring environment variables
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_env: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn figment_for(&self, key: &str) -> Figment {
        let mut figment = Figment::new().merge(Toml::file(&self.path));
        if self.use_env {
            figment = figment.merge(Env::raw().only(&[key]).lowercase(false));
        }
        figment
    }
}

impl SecretStore for FigmentSecretStore {
    fn get(&self, key: &str) -> Result<Option<String>, SecretStoreError> {
        match self.figment_for(key).extract_inner::<String>(key) {
            Ok(value) => {
                debug!(key, source = %self.path.display(), "Secret found");
                Ok(Some(value))
            }
            Err(e) if matches!(e.kind, Kind::MissingField(_)) => Ok(None),
            Err(e) => Err(SecretStoreError::Malformed(e.to_string())),
        }
    }
}
