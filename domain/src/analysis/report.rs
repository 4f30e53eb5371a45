//! Report value objects

use serde::{Deserialize, Serialize};

/// File name used when a report is downloaded or exported
pub const REPORT_FILE_NAME: &str = "jcl_optimization_report.md";

/// Content type used when a report is downloaded
pub const REPORT_CONTENT_TYPE: &str = "text/markdown";

/// Markdown returned by the remote model (Value Object)
///
/// Opaque: never parsed, reformatted, truncated or filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportText {
    content: String,
}

impl ReportText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<String> for ReportText {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl std::fmt::Display for ReportText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

/// A report packaged for download: fixed name, markdown content type, verbatim body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportExport {
    body: String,
}

impl ReportExport {
    pub fn from_report(report: &ReportText) -> Self {
        Self {
            body: report.as_str().to_string(),
        }
    }

    pub fn file_name(&self) -> &'static str {
        REPORT_FILE_NAME
    }

    pub fn content_type(&self) -> &'static str {
        REPORT_CONTENT_TYPE
    }

    /// Value for a `Content-Disposition` header that triggers a download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", REPORT_FILE_NAME)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }

    pub fn into_body(self) -> String {
        self.body
    }
}
