//! Analysis request/response domain.
//!
//! - [`settings::GenerationSettings`]: model, temperature and output cap for a request
//! - [`report::ReportText`]: the markdown returned by the remote model, kept verbatim
//! - [`report::ReportExport`]: a report packaged for download

pub mod report;
pub mod settings;
