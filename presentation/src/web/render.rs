//! HTML rendering for the analysis form
//!
//! Pages are askama templates under `templates/`. The report markdown goes
//! through pulldown-cmark with raw HTML turned into text and unsafe link
//! targets neutralized before it is embedded unescaped.

use crate::output::impact::{
    API_KEY_HELP_URL, IMPACT_CAPTION, IMPACT_METRICS, IMPACT_TITLE, ImpactMetric,
};
use askama::Template;
use jclopt_application::AnalyzeError;
use jclopt_domain::{CredentialSource, JclSample, REPORT_FILE_NAME, SessionContext};
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// What happened on the request being rendered
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed,
    Failed(AnalyzeError),
}

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Relative targets and http(s)/mailto pass; any other scheme is replaced.
fn is_safe_url(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) if !scheme.contains(['/', '?', '#']) => SAFE_SCHEMES
            .iter()
            .any(|safe| scheme.eq_ignore_ascii_case(safe)),
        _ => true,
    }
}

/// Render markdown to HTML. Raw HTML in the input is shown as text.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

struct SampleOption {
    id: &'static str,
    label: &'static str,
    selected: bool,
}

struct ErrorView {
    message: String,
    key_hint: bool,
    troubleshooting: &'static [&'static str],
}

impl ErrorView {
    fn new(error: &AnalyzeError) -> Self {
        Self {
            message: error.to_string(),
            key_hint: matches!(error, AnalyzeError::MissingCredential),
            troubleshooting: error.troubleshooting(),
        }
    }
}

struct ReportView {
    html: String,
    completed_at: String,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    key_from_secrets: bool,
    key_entered: bool,
    help_url: &'static str,
    samples: Vec<SampleOption>,
    selected_id: &'static str,
    editable: bool,
    input_text: &'a str,
    error: Option<ErrorView>,
    report: Option<ReportView>,
    just_completed: bool,
    report_file: &'static str,
    impact_title: &'static str,
    impact_caption: &'static str,
    metrics: &'static [ImpactMetric],
}

/// Render the whole page for one session
pub fn page(
    context: &SessionContext,
    outcome: Option<&Outcome>,
) -> Result<String, askama::Error> {
    let selected = context.selected_sample();
    let source = context.credential_source();

    let report = context.last_report().map(|completed| ReportView {
        html: markdown_to_html(completed.report.as_str()),
        completed_at: completed
            .completed_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    });

    PageTemplate {
        key_from_secrets: source == Some(CredentialSource::Configuration),
        key_entered: source == Some(CredentialSource::UserEntry),
        help_url: API_KEY_HELP_URL,
        samples: JclSample::all()
            .into_iter()
            .map(|sample| SampleOption {
                id: sample.id(),
                label: sample.label(),
                selected: sample == selected,
            })
            .collect(),
        selected_id: selected.id(),
        editable: selected.is_editable(),
        input_text: context.input_text(),
        error: match outcome {
            Some(Outcome::Failed(error)) => Some(ErrorView::new(error)),
            _ => None,
        },
        just_completed: report.is_some() && outcome == Some(&Outcome::Completed),
        report,
        report_file: REPORT_FILE_NAME,
        impact_title: IMPACT_TITLE,
        impact_caption: IMPACT_CAPTION,
        metrics: &IMPACT_METRICS,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jclopt_domain::{Credential, ReportText};

    #[test]
    fn test_markdown_tables_render() {
        let html = markdown_to_html("# Report\n\n| Step | Region |\n|---|---|\n| STEP010 | 64M |\n");
        assert!(html.contains("<h1>Report</h1>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>STEP010</td>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = markdown_to_html("before <script>alert(1)</script> after\n\n<div>block</div>\n");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<div>"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = markdown_to_html(
            "[click](javascript:alert(1)) [img](JavaScript:x) ![pic](data:image/png;base64,AA)",
        );
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(!html.contains("data:image"));
        assert!(html.contains(r##"<a href="#">click</a>"##));

        let html = markdown_to_html("<javascript:alert(1)>");
        assert!(!html.contains(r#"href="javascript:"#));
    }

    #[test]
    fn test_web_and_relative_links_are_kept() {
        let html = markdown_to_html(
            "[a](https://example.com/x) [b](mailto:ops) [c](#step-3) [d](docs/a:b)",
        );
        assert!(html.contains(r#"href="https://example.com/x""#));
        assert!(html.contains(r#"href="mailto:ops""#));
        assert!(html.contains(r##"href="#step-3""##));
        assert!(html.contains(r#"href="docs/a:b""#));
    }

    #[test]
    fn test_placeholder_disables_textarea() {
        let html = page(&SessionContext::new(), None).unwrap();
        assert!(html.contains(" disabled>"));
        assert!(html.contains("Select a sample"));
        assert!(html.contains(r#"name="api_key""#));
    }

    #[test]
    fn test_configured_credential_hides_key_field() {
        let context = SessionContext::with_configured_credential(Credential::new("k").unwrap());
        let html = page(&context, None).unwrap();
        assert!(!html.contains(r#"name="api_key""#));
        assert!(html.contains("API Key configured (from deployment secrets)"));
    }

    #[test]
    fn test_input_text_is_escaped_in_textarea() {
        let mut context = SessionContext::new();
        context.select_sample(JclSample::Custom);
        context.set_input_text("//J JOB </textarea><b>x</b>");
        let html = page(&context, None).unwrap();
        assert!(!html.contains("</textarea><b>"));
        assert!(html.contains("&lt;b&gt;x&lt;"));
    }

    #[test]
    fn test_completed_report_shows_panel_and_download() {
        let mut context = SessionContext::new();
        context.record_report(ReportText::new("# Report\nOK"), chrono::Utc::now());
        let html = page(&context, Some(&Outcome::Completed)).unwrap();
        assert!(html.contains("<h1>Report</h1>"));
        assert!(html.contains("Typical Optimization Impact"));
        assert!(html.contains("/report/download"));
        assert!(html.contains("Analysis complete!"));
    }

    #[test]
    fn test_remote_failure_shows_troubleshooting() {
        let outcome = Outcome::Failed(AnalyzeError::RemoteCallFailed(
            "API error (400): <bad key>".to_string(),
        ));
        let html = page(&SessionContext::new(), Some(&outcome)).unwrap();
        assert!(html.contains("Error occurred: API error (400): &lt;bad key&gt;"));
        assert!(html.contains("Troubleshooting:"));
        assert!(html.contains("Make sure the API key has quota remaining"));
    }
}
