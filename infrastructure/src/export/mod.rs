//! Filesystem export of finished reports

mod markdown;

pub use markdown::{ExportError, MarkdownReportExporter};
