#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use chronicle_api::http::router::build_router;
use chronicle_api::state::AppState;
use chronicle_core::gateway::{GatewaySettings, ModelGateway};
use chronicle_core::llm::box_provider::BoxLlmProvider;
use chronicle_core::llm::provider::LlmProvider;
use chronicle_types::config::ModelErrorPolicy;
use chronicle_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

/// What the fake model does on every call.
#[derive(Clone)]
pub enum Reply {
    Text(&'static str),
    Empty,
    AuthFailure,
}

/// Deterministic stand-in for the remote model.
///
/// Records every prompt it receives so tests can inspect both the call
/// count and the rendered prompt.
pub struct FakeModel {
    reply: Reply,
    prompts: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl LlmProvider for FakeModel {
    fn name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = request
            .messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);

        let content = match self.reply {
            Reply::Text(text) => text.to_string(),
            Reply::Empty => String::new(),
            Reply::AuthFailure => return Err(LlmError::AuthenticationFailed),
        };

        Ok(CompletionResponse {
            id: "fake-1".to_string(),
            content,
            model: request.model.clone(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}

/// Router wired to a [`FakeModel`], plus handles to observe it.
pub struct TestApp {
    pub router: Router,
    prompts: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl TestApp {
    pub fn new(reply: Reply, policy: ModelErrorPolicy) -> Self {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));
        let model = FakeModel {
            reply,
            prompts: prompts.clone(),
            calls: calls.clone(),
        };

        let gateway = ModelGateway::new(
            BoxLlmProvider::new(model),
            GatewaySettings {
                model: "gemini-2.0-flash".to_string(),
                max_output_tokens: 2048,
                temperature: None,
            },
        );
        let router = build_router(AppState::new(gateway, policy));

        Self {
            router,
            prompts,
            calls,
        }
    }

    /// App whose model always answers with `text`, inline error policy.
    pub fn replying(text: &'static str) -> Self {
        Self::new(Reply::Text(text), ModelErrorPolicy::Inline)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

/// POST `body` as JSON to `uri`.
pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

/// POST an arbitrary body with an optional content type.
pub async fn post_raw(
    app: &TestApp,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(body.into()).unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// GET `uri`.
pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
