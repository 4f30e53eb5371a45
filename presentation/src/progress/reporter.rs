//! Progress reporting while an analysis request is pending

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use jclopt_application::AnalysisProgress;
use jclopt_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Indeterminate spinner shown while the remote model works
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgress for SpinnerProgress {
    fn on_request_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!(
            "🤖 {} is analyzing your JCL... (15-30 seconds)",
            model.to_string().bold()
        ));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, success: bool) {
        if let Some(pb) = self.take() {
            if success {
                pb.finish_with_message(format!("{}", "Analysis complete!".green()));
            } else {
                pb.abandon_with_message(format!("{}", "Analysis failed".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl AnalysisProgress for SimpleProgress {
    fn on_request_start(&self, model: &Model) {
        eprintln!("{} Analyzing with {}...", "->".cyan(), model.to_string().bold());
    }

    fn on_request_complete(&self, success: bool) {
        if success {
            eprintln!("  {} done", "v".green());
        } else {
            eprintln!("  {} failed", "x".red());
        }
    }
}
