//! Console output formatter for analysis results

use crate::output::impact::{API_KEY_HELP_URL, IMPACT_CAPTION, IMPACT_METRICS, IMPACT_TITLE};
use colored::Colorize;
use jclopt_application::AnalyzeError;
use jclopt_domain::{JclSample, ModelInfo, ReportText};
use std::path::Path;

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a finished report followed by the impact panel
    pub fn format_report(report: &ReportText) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("JCL Optimization Report"));
        output.push('\n');
        output.push_str(report.as_str());
        if !report.as_str().ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&Self::format_impact());
        output.push_str(&Self::footer());

        output
    }

    /// Format the static impact panel
    pub fn format_impact() -> String {
        let mut output = Self::section_header(IMPACT_TITLE);
        output.push_str(&format!("{}\n\n", IMPACT_CAPTION.dimmed()));
        for metric in &IMPACT_METRICS {
            output.push_str(&format!(
                "  {:<22} {:>10}  {}\n",
                metric.label.bold(),
                metric.value.cyan().bold(),
                format!("({})", metric.delta).green()
            ));
        }
        output
    }

    /// Format an analysis error, with troubleshooting for remote failures
    pub fn format_error(error: &AnalyzeError) -> String {
        let mut output = format!("{} {}\n", "❌".red(), error.to_string().red().bold());

        match error {
            AnalyzeError::MissingCredential => {
                output.push_str(&format!(
                    "{} Get a free key from: {}\n",
                    "💡".yellow(),
                    API_KEY_HELP_URL.underline()
                ));
            }
            AnalyzeError::MissingInput => {
                output.push_str(&format!(
                    "{} Use --file, --sample or pipe JCL on stdin\n",
                    "💡".yellow()
                ));
            }
            AnalyzeError::RemoteCallFailed(_) => {
                output.push_str(&format!("\n{}\n", "Troubleshooting:".yellow().bold()));
                for step in error.troubleshooting() {
                    output.push_str(&format!("  {} {}\n", "✅".green(), step));
                }
                output.push_str(&format!(
                    "  {} Get a new key from: {}\n",
                    "💡".yellow(),
                    API_KEY_HELP_URL
                ));
            }
        }

        output
    }

    /// Format the sample catalogue
    pub fn format_samples() -> String {
        let mut output = format!("{}\n\n", "Available JCL samples:".cyan().bold());
        for sample in JclSample::loadable() {
            let lines = sample.default_text().lines().count();
            output.push_str(&format!(
                "  {:<15} {} {}\n",
                sample.id().bold(),
                sample.label(),
                format!("({} lines)", lines).dimmed()
            ));
        }
        output
    }

    /// Format the model listing the way the key check prints it
    pub fn format_models(models: &[ModelInfo]) -> String {
        let mut output = format!(
            "{}\n\n",
            "✅ Available models that support generateContent:".green().bold()
        );
        if models.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for model in models {
            output.push_str(&format!("{} {}", "✓".green(), model.name));
            if let Some(display_name) = &model.display_name {
                output.push_str(&format!(" {}", format!("({})", display_name).dimmed()));
            }
            output.push('\n');
        }
        output
    }

    /// Format a failure of the model listing
    pub fn format_models_error(message: &str) -> String {
        format!(
            "{} Error: {}\n\n{} Check if your API key is correct!\n",
            "❌".red(),
            message,
            "⚠️".yellow()
        )
    }

    pub fn format_exported(path: &Path) -> String {
        format!("{} Report saved to {}\n", "📥".green(), path.display())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    fn footer() -> String {
        format!(
            "\n{}\n{}\n",
            "─".repeat(60).dimmed(),
            "Verify recommendations in a test environment before production implementation."
                .dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_report_is_printed_verbatim() {
        plain();
        let body = "# Report\n\n| Step | Region |\n|---|---|\n| STEP010 | 64M |";
        let output = ConsoleFormatter::format_report(&ReportText::new(body));
        assert!(output.contains(body));
        assert!(output.contains("Typical Optimization Impact"));
        assert!(output.contains("$438K"));
    }

    #[test]
    fn test_remote_error_lists_troubleshooting() {
        plain();
        let output = ConsoleFormatter::format_error(&AnalyzeError::RemoteCallFailed(
            "API error (429): quota".to_string(),
        ));
        assert!(output.contains("Error occurred: API error (429): quota"));
        assert!(output.contains("Troubleshooting:"));
        assert!(output.contains("Check your API key is correct"));
        assert!(output.contains("quota remaining"));
    }

    #[test]
    fn test_validation_errors_skip_troubleshooting() {
        plain();
        let output = ConsoleFormatter::format_error(&AnalyzeError::MissingCredential);
        assert!(output.contains("Please enter your Google Gemini API key"));
        assert!(!output.contains("Troubleshooting:"));
        assert!(output.contains(API_KEY_HELP_URL));
    }

    #[test]
    fn test_models_listing() {
        plain();
        let models = vec![
            ModelInfo::new("models/gemini-2.5-flash", vec!["generateContent".to_string()])
                .with_display_name("Gemini 2.5 Flash"),
            ModelInfo::new("models/gemini-2.5-pro", vec!["generateContent".to_string()]),
        ];
        let output = ConsoleFormatter::format_models(&models);
        assert!(output.contains("✓ models/gemini-2.5-flash (Gemini 2.5 Flash)"));
        assert!(output.contains("✓ models/gemini-2.5-pro\n"));
    }

    #[test]
    fn test_samples_listing_skips_placeholder() {
        plain();
        let output = ConsoleFormatter::format_samples();
        assert!(output.contains("annuity"));
        assert!(output.contains("manufacturing"));
        assert!(!output.contains("Select a sample"));
    }
}
