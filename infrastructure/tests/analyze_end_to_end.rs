//! Sample JCL through the analysis use case, the Gemini adapter and the
//! exporter, against a local stub of the generation endpoint.

use axum::{Json, Router, routing::post};
use jclopt_application::{AnalyzeError, AnalyzeJclUseCase};
use jclopt_domain::{Credential, GenerationSettings, JclSample, ReportExport, REPORT_FILE_NAME};
use jclopt_infrastructure::{GeminiGateway, MarkdownReportExporter};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

async fn spawn_stub(calls: Arc<AtomicUsize>) -> String {
    let app = Router::new().route(
        "/v1beta/models/{*rest}",
        post(move |Json(_body): Json<Value>| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "candidates": [{"content": {"role": "model", "parts": [{"text": "# Report\nOK"}]}}]
                }))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn sample_jcl_round_trips_to_exported_file() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(Arc::clone(&calls)).await;
    let gateway = Arc::new(GeminiGateway::new(base, None).unwrap());
    let use_case = AnalyzeJclUseCase::new(gateway, GenerationSettings::default());
    let credential = Credential::new("valid-key").unwrap();

    let report = use_case
        .execute(Some(&credential), JclSample::DailyAnnuity.default_text())
        .await
        .unwrap();
    assert_eq!(report.as_str(), "# Report\nOK");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let dir = tempfile::tempdir().unwrap();
    let written = MarkdownReportExporter::export(dir.path(), &ReportExport::from_report(&report))
        .unwrap();
    assert_eq!(written.file_name().unwrap(), REPORT_FILE_NAME);
    assert_eq!(std::fs::read(written).unwrap(), b"# Report\nOK");
}

#[tokio::test]
async fn placeholder_sample_never_reaches_the_endpoint() {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_stub(Arc::clone(&calls)).await;
    let gateway = Arc::new(GeminiGateway::new(base, None).unwrap());
    let use_case = AnalyzeJclUseCase::new(gateway, GenerationSettings::default());
    let credential = Credential::new("valid-key").unwrap();

    let result = use_case
        .execute(Some(&credential), JclSample::Placeholder.default_text())
        .await;
    assert_eq!(result, Err(AnalyzeError::MissingInput));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
