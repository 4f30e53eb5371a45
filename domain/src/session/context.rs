//! Per-session state for the interactive surface

use crate::analysis::report::{ReportExport, ReportText};
use crate::core::credential::{Credential, CredentialSource};
use crate::samples::JclSample;
use chrono::{DateTime, Utc};

/// A report that completed successfully in this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedReport {
    pub report: ReportText,
    pub completed_at: DateTime<Utc>,
}

/// Everything one user session remembers between requests
///
/// Passed explicitly to handlers instead of living in global state, so the
/// request/response cycle can be exercised in isolation.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    selected_sample: JclSample,
    input_text: String,
    credential: Option<(Credential, CredentialSource)>,
    last_report: Option<CompletedReport>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            input_text: JclSample::default().default_text().to_string(),
            ..Self::default()
        }
    }

    /// Start a session whose credential was resolved from configuration
    pub fn with_configured_credential(credential: Credential) -> Self {
        let mut context = Self::new();
        context.credential = Some((credential, CredentialSource::Configuration));
        context
    }

    pub fn selected_sample(&self) -> JclSample {
        self.selected_sample
    }

    /// Select a sample and load its default text into the input
    pub fn select_sample(&mut self, sample: JclSample) {
        self.selected_sample = sample;
        self.input_text = sample.default_text().to_string();
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref().map(|(c, _)| c)
    }

    pub fn credential_source(&self) -> Option<CredentialSource> {
        self.credential.as_ref().map(|(_, source)| *source)
    }

    /// Store a credential the user typed in
    ///
    /// A credential that came from configuration is never replaced.
    pub fn set_entered_credential(&mut self, credential: Credential) {
        if self.credential_source() != Some(CredentialSource::Configuration) {
            self.credential = Some((credential, CredentialSource::UserEntry));
        }
    }

    pub fn record_report(&mut self, report: ReportText, completed_at: DateTime<Utc>) {
        self.last_report = Some(CompletedReport {
            report,
            completed_at,
        });
    }

    /// Forget the previous report after a failed attempt
    pub fn record_failure(&mut self) {
        self.last_report = None;
    }

    pub fn last_report(&self) -> Option<&CompletedReport> {
        self.last_report.as_ref()
    }

    /// Package the last report for download, if there is one
    pub fn export(&self) -> Option<ReportExport> {
        self.last_report
            .as_ref()
            .map(|completed| ReportExport::from_report(&completed.report))
    }
}
