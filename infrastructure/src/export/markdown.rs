//! Writes a [`ReportExport`] to disk byte-for-byte

use jclopt_domain::ReportExport;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while exporting a report
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Exporter for markdown reports
pub struct MarkdownReportExporter;

impl MarkdownReportExporter {
    /// Resolve the file an export to `target` would write.
    ///
    /// An existing directory (or a path ending in a separator) gets the
    /// export's fixed file name appended.
    pub fn resolve_target(target: &Path, export: &ReportExport) -> PathBuf {
        let ends_with_separator = target
            .as_os_str()
            .to_string_lossy()
            .ends_with(std::path::MAIN_SEPARATOR);
        if target.is_dir() || ends_with_separator {
            target.join(export.file_name())
        } else {
            target.to_path_buf()
        }
    }

    /// Write the export and return the path written
    pub fn export(target: &Path, export: &ReportExport) -> Result<PathBuf, ExportError> {
        let path = Self::resolve_target(target, export);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&path, export.as_bytes()).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = export.as_bytes().len(), "Report exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jclopt_domain::{REPORT_FILE_NAME, ReportText};

    fn export_of(text: &str) -> ReportExport {
        ReportExport::from_report(&ReportText::new(text))
    }

    #[test]
    fn test_directory_target_uses_fixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let export = export_of("# Report\nOK");

        let written = MarkdownReportExporter::export(dir.path(), &export).unwrap();

        assert_eq!(written, dir.path().join(REPORT_FILE_NAME));
        assert_eq!(std::fs::read(&written).unwrap(), b"# Report\nOK");
    }

    #[test]
    fn test_file_target_is_used_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out.md");
        let body = "# Ünïcode ✓\r\n\ttabs and trailing   \n";

        let written = MarkdownReportExporter::export(&target, &export_of(body)).unwrap();

        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).unwrap(), body.as_bytes());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.md");
        std::fs::write(&target, "old contents that are longer").unwrap();

        MarkdownReportExporter::export(&target, &export_of("new")).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        // A regular file cannot act as a parent directory
        let err = MarkdownReportExporter::export(&blocker.join("out.md"), &export_of("x"))
            .unwrap_err();
        assert!(err.to_string().contains("out.md") || err.to_string().contains("file"));
    }
}
