//! Route handlers for the analysis form

use super::render::{self, Outcome};
use super::session::{session_id, session_or_new, with_session_cookie};
use super::state::AppState;
use axum::{
    Form,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use jclopt_domain::{Credential, JclSample, SessionContext};
use serde::Deserialize;
use tracing::{debug, error, info};

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub sample: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeForm {
    /// Absent when the text area is disabled
    pub jcl: Option<String>,
    pub api_key: Option<String>,
    pub sample: Option<String>,
}

fn parse_sample(id: Option<&str>) -> Option<JclSample> {
    let id = id?;
    match id.parse() {
        Ok(sample) => Some(sample),
        Err(e) => {
            debug!("Ignoring sample selection: {}", e);
            None
        }
    }
}

fn render_page(context: &SessionContext, outcome: Option<&Outcome>) -> Response {
    match render::page(context, outcome) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// `GET /` and `GET /?sample=<id>`
///
/// Only a sample selection creates a session; a bare visit renders the
/// existing context, or a fresh one that is not stored.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IndexQuery>,
) -> Response {
    let Some(sample) = parse_sample(query.sample.as_deref()) else {
        let context = match session_id(&headers) {
            Some(id) => state.sessions.snapshot(id).await,
            None => state.sessions.fresh_context(),
        };
        return render_page(&context, None);
    };

    let (id, is_new) = session_or_new(&headers);
    let context = state
        .sessions
        .with_session(id, |context| {
            context.select_sample(sample);
            context.clone()
        })
        .await;

    with_session_cookie(render_page(&context, None), id, is_new)
}

/// `POST /analyze`
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let (id, is_new) = session_or_new(&headers);
    let sample = parse_sample(form.sample.as_deref());
    let entered = form.api_key.as_deref().and_then(Credential::try_new);

    let (credential, input_text) = state
        .sessions
        .with_session(id, |context| {
            if let Some(sample) = sample
                && sample != context.selected_sample()
            {
                context.select_sample(sample);
            }
            if let Some(jcl) = form.jcl {
                context.set_input_text(jcl);
            }
            if let Some(credential) = entered {
                context.set_entered_credential(credential);
            }
            (context.credential().cloned(), context.input_text().to_string())
        })
        .await;

    // Session lock released: the remote call may take a while
    let result = state.analyzer.execute(credential.as_ref(), &input_text).await;

    let (context, outcome) = state
        .sessions
        .with_session(id, |context| {
            let outcome = match result {
                Ok(report) => {
                    context.record_report(report, Utc::now());
                    Outcome::Completed
                }
                Err(error) => {
                    context.record_failure();
                    Outcome::Failed(error)
                }
            };
            (context.clone(), outcome)
        })
        .await;

    info!(session = %id, success = outcome == Outcome::Completed, "Analyze request handled");
    with_session_cookie(render_page(&context, Some(&outcome)), id, is_new)
}

/// `GET /report/download`
pub async fn download(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let export = match session_id(&headers) {
        Some(id) => state.sessions.export(id).await,
        None => None,
    };

    let Some(export) = export else {
        return (StatusCode::NOT_FOUND, "No report available yet").into_response();
    };

    (
        [
            (
                header::CONTENT_TYPE,
                format!("{}; charset=utf-8", export.content_type()),
            ),
            (header::CONTENT_DISPOSITION, export.content_disposition()),
        ],
        export.into_body(),
    )
        .into_response()
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
