//! Progress notification port
//!
//! Lets the caller show a busy indicator while a remote call is pending.

use jclopt_domain::Model;

/// Callback for progress updates during an analysis
///
/// Implementations live in the presentation layer (spinner, web status, ...).
pub trait AnalysisProgress: Send + Sync {
    /// Called right before the remote request is issued
    fn on_request_start(&self, model: &Model);

    /// Called when the remote request finished, successfully or not
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AnalysisProgress for NoProgress {
    fn on_request_start(&self, _model: &Model) {}
    fn on_request_complete(&self, _success: bool) {}
}
