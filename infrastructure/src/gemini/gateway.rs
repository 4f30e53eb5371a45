//! Gemini LLM Gateway implementation

use super::types::{
    ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, ListModelsResponse,
};
use async_trait::async_trait;
use jclopt_application::ports::llm_gateway::{GatewayError, GenerationRequest, LlmGateway};
use jclopt_domain::{Credential, ModelInfo};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Largest page the listing endpoint accepts
const LIST_PAGE_SIZE: &str = "1000";

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiGateway {
    client: Client,
    base_url: String,
}

impl GeminiGateway {
    /// Create a gateway against `base_url` (no trailing `/v1beta`).
    ///
    /// With `timeout = None` requests wait indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(base_url = %base_url, ?timeout, "GeminiGateway initialized");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn generate_url(&self, request: &GenerationRequest) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            request.model.as_str()
        )
    }

    fn models_url(&self) -> String {
        format!("{}/v1beta/models", self.base_url)
    }

    async fn send(builder: RequestBuilder, credential: &Credential) -> Result<Response, GatewayError> {
        let response = builder
            .header(API_KEY_HEADER, credential.expose())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
            _ if !body.trim().is_empty() => body.trim().to_string(),
            _ => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        warn!(status = status.as_u16(), "Gemini request rejected: {}", message);

        Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() || e.is_request() {
        GatewayError::ConnectionError(e.to_string())
    } else if e.is_decode() {
        GatewayError::Decode(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(
        &self,
        credential: &Credential,
        request: &GenerationRequest,
    ) -> Result<String, GatewayError> {
        let url = self.generate_url(request);
        debug!(url = %url, prompt_bytes = request.prompt.len(), "Sending generateContent");

        let body = GenerateContentRequest::user_prompt(
            &request.prompt,
            request.temperature,
            request.max_output_tokens,
        );
        let response = Self::send(self.client.post(&url).json(&body), credential).await?;

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::Decode(e.to_string())
            }
        })?;

        parsed
            .first_candidate_text()
            .ok_or_else(|| GatewayError::EmptyResponse(parsed.empty_reason()))
    }

    async fn available_models(
        &self,
        credential: &Credential,
    ) -> Result<Vec<ModelInfo>, GatewayError> {
        let url = self.models_url();
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut builder = self.client.get(&url).query(&[("pageSize", LIST_PAGE_SIZE)]);
            if let Some(token) = &page_token {
                builder = builder.query(&[("pageToken", token.as_str())]);
            }

            let page: ListModelsResponse = Self::send(builder, credential)
                .await?
                .json()
                .await
                .map_err(|e| GatewayError::Decode(e.to_string()))?;

            debug!(count = page.models.len(), "Received model page");
            models.extend(page.models.into_iter().map(|m| {
                let info = ModelInfo::new(m.name, m.supported_generation_methods);
                match m.display_name {
                    Some(display_name) => info.with_display_name(display_name),
                    None => info,
                }
            }));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::{get, post},
    };
    use jclopt_domain::{GenerationSettings, Model};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // ==================== Stub server ====================

    #[derive(Default)]
    struct Recorded {
        paths: Vec<String>,
        keys: Vec<String>,
        bodies: Vec<Value>,
        page_tokens: Vec<Option<String>>,
    }

    #[derive(Clone)]
    struct Stub {
        recorded: Arc<Mutex<Recorded>>,
        status: StatusCode,
        reply: Value,
        delay: Option<Duration>,
    }

    async fn generate_handler(
        State(stub): State<Stub>,
        axum::extract::Path(rest): axum::extract::Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> impl IntoResponse {
        {
            let mut recorded = stub.recorded.lock().unwrap();
            recorded.paths.push(rest);
            recorded.keys.push(
                headers
                    .get(API_KEY_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string(),
            );
            recorded.bodies.push(body);
        }
        if let Some(delay) = stub.delay {
            tokio::time::sleep(delay).await;
        }
        (stub.status, Json(stub.reply.clone()))
    }

    async fn list_handler(
        State(stub): State<Stub>,
        Query(params): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        let token = params.get("pageToken").cloned();
        stub.recorded.lock().unwrap().page_tokens.push(token.clone());

        let page = match token.as_deref() {
            None => json!({
                "models": [
                    {"name": "models/gemini-2.5-flash", "displayName": "Gemini 2.5 Flash",
                     "supportedGenerationMethods": ["generateContent", "countTokens"]},
                    {"name": "models/text-embedding-004",
                     "supportedGenerationMethods": ["embedContent"]}
                ],
                "nextPageToken": "page-2"
            }),
            Some(_) => json!({
                "models": [
                    {"name": "models/gemini-2.5-pro",
                     "supportedGenerationMethods": ["generateContent"]}
                ]
            }),
        };
        (stub.status, Json(if stub.status.is_success() { page } else { stub.reply.clone() }))
    }

    async fn spawn_stub(status: StatusCode, reply: Value, delay: Option<Duration>) -> (String, Stub) {
        let stub = Stub {
            recorded: Arc::new(Mutex::new(Recorded::default())),
            status,
            reply,
            delay,
        };
        let app = Router::new()
            .route("/v1beta/models", get(list_handler))
            .route("/v1beta/models/{*rest}", post(generate_handler))
            .with_state(stub.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), stub)
    }

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest::new(prompt, &GenerationSettings::default())
    }

    fn key() -> Credential {
        Credential::new("stub-key").unwrap()
    }

    fn ok_reply(text: &str) -> Value {
        json!({"candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]})
    }

    // ==================== generate ====================

    #[tokio::test]
    async fn test_generate_returns_text_and_sends_expected_request() {
        let (base, stub) = spawn_stub(StatusCode::OK, ok_reply("# Report\nOK"), None).await;
        let gateway = GeminiGateway::new(format!("{}/", base), None).unwrap();

        let text = gateway.generate(&key(), &request("analyze this")).await.unwrap();
        assert_eq!(text, "# Report\nOK");

        let recorded = stub.recorded.lock().unwrap();
        assert_eq!(recorded.paths, vec!["gemini-2.5-flash:generateContent".to_string()]);
        assert_eq!(recorded.keys, vec!["stub-key".to_string()]);
        let body = &recorded.bodies[0];
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "analyze this");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 8000);
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_generate_uses_configured_model() {
        let (base, stub) = spawn_stub(StatusCode::OK, ok_reply("x"), None).await;
        let gateway = GeminiGateway::new(base, None).unwrap();
        let settings = GenerationSettings::default().with_model(Model::Gemini25Pro);

        gateway
            .generate(&key(), &GenerationRequest::new("p", &settings))
            .await
            .unwrap();
        assert_eq!(
            stub.recorded.lock().unwrap().paths,
            vec!["gemini-2.5-pro:generateContent".to_string()]
        );
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let (base, _stub) = spawn_stub(
            StatusCode::BAD_REQUEST,
            json!({"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}),
            None,
        )
        .await;
        let gateway = GeminiGateway::new(base, None).unwrap();

        let err = gateway.generate(&key(), &request("p")).await.unwrap_err();
        match err {
            GatewayError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid. Please pass a valid API key.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_empty_response() {
        let (base, _stub) = spawn_stub(
            StatusCode::OK,
            json!({"promptFeedback": {"blockReason": "SAFETY"}}),
            None,
        )
        .await;
        let gateway = GeminiGateway::new(base, None).unwrap();

        let err = gateway.generate(&key(), &request("p")).await.unwrap_err();
        assert!(matches!(&err, GatewayError::EmptyResponse(m) if m.contains("SAFETY")));
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let (base, _stub) = spawn_stub(
            StatusCode::OK,
            ok_reply("late"),
            Some(Duration::from_secs(5)),
        )
        .await;
        let gateway = GeminiGateway::new(base, Some(Duration::from_millis(100))).unwrap();

        let err = gateway.generate(&key(), &request("p")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = GeminiGateway::new(format!("http://{}", addr), None).unwrap();
        let err = gateway.generate(&key(), &request("p")).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    // ==================== available_models ====================

    #[tokio::test]
    async fn test_available_models_follows_pagination() {
        let (base, stub) = spawn_stub(StatusCode::OK, Value::Null, None).await;
        let gateway = GeminiGateway::new(base, None).unwrap();

        let models = gateway.available_models(&key()).await.unwrap();
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "models/gemini-2.5-flash",
                "models/text-embedding-004",
                "models/gemini-2.5-pro"
            ]
        );
        assert_eq!(models[0].display_name.as_deref(), Some("Gemini 2.5 Flash"));
        assert_eq!(
            stub.recorded.lock().unwrap().page_tokens,
            vec![None, Some("page-2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_available_models_error() {
        let (base, _stub) = spawn_stub(
            StatusCode::FORBIDDEN,
            json!({"error": {"code": 403, "message": "Permission denied"}}),
            None,
        )
        .await;
        let gateway = GeminiGateway::new(base, None).unwrap();

        let err = gateway.available_models(&key()).await.unwrap_err();
        assert!(err.to_string().contains("Permission denied"));
    }
}
