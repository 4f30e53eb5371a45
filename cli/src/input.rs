//! Where the `analyze` command gets its JCL from

use anyhow::{Context, Result, bail};
use jclopt_domain::JclSample;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Source of the job control text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JclSource {
    File(PathBuf),
    Sample(JclSample),
    Stdin,
}

impl JclSource {
    /// Pick the source from `--file` / `--sample`, falling back to stdin
    pub fn from_args(file: Option<&Path>, sample: Option<&str>) -> Result<Self> {
        if let Some(path) = file {
            return Ok(JclSource::File(path.to_path_buf()));
        }
        if let Some(id) = sample {
            let sample: JclSample = id.parse()?;
            if !JclSample::loadable().contains(&sample) {
                bail!(
                    "'{}' has no JCL; choose one of: {}",
                    id,
                    JclSample::loadable().map(|s| s.id()).join(", ")
                );
            }
            return Ok(JclSource::Sample(sample));
        }
        Ok(JclSource::Stdin)
    }

    pub fn reads_stdin(&self) -> bool {
        matches!(self, JclSource::Stdin)
    }

    /// Read the text. Validation is left to the analysis use case.
    pub fn read(&self) -> Result<String> {
        match self {
            JclSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read JCL from {}", path.display())),
            JclSource::Sample(sample) => Ok(sample.default_text().to_string()),
            JclSource::Stdin => {
                let mut stdin = std::io::stdin();
                if stdin.is_terminal() {
                    eprintln!("Paste JCL, then press Ctrl-D:");
                }
                let mut text = String::new();
                stdin
                    .read_to_string(&mut text)
                    .context("Failed to read JCL from stdin")?;
                Ok(text)
            }
        }
    }
}
