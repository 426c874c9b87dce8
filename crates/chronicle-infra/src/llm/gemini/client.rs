//! GeminiProvider -- concrete [`LlmProvider`] implementation for Google Gemini.
//!
//! Sends requests to `POST {base}/v1beta/models/{model}:generateContent`
//! with the API key in the `x-goog-api-key` header.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output. A provider built without a key still
//! constructs; every call then fails with [`LlmError::AuthenticationFailed`].

use secrecy::{ExposeSecret, SecretString};

use chronicle_core::llm::provider::LlmProvider;
use chronicle_observe::genai_attrs::PROVIDER_GEMINI;
use chronicle_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use super::types::{
    GeminiContent, GeminiErrorEnvelope, GeminiPart, GeminiRequest, GeminiResponse,
    GenerationConfig,
};

/// Public endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini LLM provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key, if one was configured
    /// * `model` - Default model identifier (e.g., "gemini-2.0-flash")
    pub fn new(api_key: Option<SecretString>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    /// The default model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Full `generateContent` URL for `model`.
    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`CompletionRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| GeminiContent {
                role: Some(m.role.to_string()),
                parts: vec![GeminiPart {
                    text: Some(m.content.clone()),
                }],
            })
            .collect();

        GeminiRequest {
            contents,
            generation_config: GenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            },
        }
    }
}

// GeminiProvider does NOT derive Debug so the client and key never end up
// in log output.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_GEMINI
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let Some(api_key) = self.api_key.as_ref() else {
            return Err(LlmError::AuthenticationFailed);
        };

        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };
        let body = self.to_gemini_request(request);

        let response = self
            .client
            .post(self.url(model))
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status.as_u16(), &error_body));
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        Ok(into_completion(gemini_resp, model))
    }
}

/// Convert a Gemini response into a [`CompletionResponse`].
///
/// A prompt blocked before generation yields empty content with
/// [`StopReason::ContentFilter`]; the gateway decides what that means.
fn into_completion(resp: GeminiResponse, requested_model: &str) -> CompletionResponse {
    let usage = resp
        .usage_metadata
        .map(|u| Usage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        })
        .unwrap_or_default();

    let id = resp.response_id.unwrap_or_default();
    let model = resp
        .model_version
        .unwrap_or_else(|| requested_model.to_string());

    let Some(candidate) = resp.candidates.into_iter().next() else {
        let blocked = resp
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .is_some();
        return CompletionResponse {
            id,
            content: String::new(),
            model,
            stop_reason: if blocked {
                StopReason::ContentFilter
            } else {
                StopReason::EndTurn
            },
            usage,
        };
    };

    let content = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let stop_reason = match candidate.finish_reason.as_deref() {
        Some("MAX_TOKENS") => StopReason::MaxTokens,
        Some("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII") => {
            StopReason::ContentFilter
        }
        _ => StopReason::EndTurn,
    };

    CompletionResponse {
        id,
        content,
        model,
        stop_reason,
        usage,
    }
}

/// Map a non-2xx status and body to an [`LlmError`].
///
/// Gemini reports an invalid key as `400 INVALID_ARGUMENT` rather than 401.
/// Any other client or server error keeps its status and message.
fn map_error_status(status: u16, body: &str) -> LlmError {
    let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
        .map(|env| env.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        401 | 403 => LlmError::AuthenticationFailed,
        400 if message.contains("API key") => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited {
            retry_after_ms: None,
        },
        503 => LlmError::Overloaded(message),
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}
