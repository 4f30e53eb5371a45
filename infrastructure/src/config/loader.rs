//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["jclopt.toml", ".jclopt.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./jclopt.toml` or `./.jclopt.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/jcl-optimizer/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::figment_for(global.as_deref(), project.as_deref(), config_path.map(|p| p.as_path()))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment_for(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/jcl-optimizer/config.toml if set,
    /// otherwise falls back to ~/.config/jcl-optimizer/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("jcl-optimizer").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:^7}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [ FOUND ] Project: {}", path.display());
        } else {
            println!("  [       ] Project: ./jclopt.toml or ./.jclopt.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [ FOUND ] Global:  {}", path.display());
            } else {
                println!("  [       ] Global:  {}", path.display());
            }
        }

        println!("  [       ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.analysis.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("jcl-optimizer"));
    }

    #[test]
    fn test_later_sources_override_earlier() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "global.toml",
                r#"
[analysis]
model = "gemini-2.0-flash"
temperature = 0.9

[server]
port = 7000
"#,
            )?;
            jail.create_file(
                "explicit.toml",
                r#"
[analysis]
temperature = 0.1
"#,
            )?;

            let config: FileConfig = ConfigLoader::figment_for(
                Some(Path::new("global.toml")),
                None,
                Some(Path::new("explicit.toml")),
            )
            .extract()?;

            assert_eq!(config.analysis.model, "gemini-2.0-flash");
            assert_eq!(config.analysis.temperature, 0.1);
            assert_eq!(config.server.port, 7000);
            assert_eq!(config.server.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_discovered() {
        Jail::expect_with(|jail| {
            jail.create_file(".jclopt.toml", "[server]\nport = 8600\n")?;
            assert_eq!(
                ConfigLoader::project_config_path(),
                Some(PathBuf::from(".jclopt.toml"))
            );

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.port, 8600);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[server]\nport = \"not a number\"\n")?;
            let result = ConfigLoader::load(Some(&PathBuf::from("bad.toml")));
            assert!(result.is_err());
            Ok(())
        });
    }
}
