//! Model gateway: one prompt in, generated text out.
//!
//! [`ModelGateway::generate`] reports failures explicitly so the caller can
//! choose how to surface them. [`ModelGateway::call_model`] never fails: it
//! folds every failure into a short marker string, which is what HTTP
//! callers receive under the default `inline` error policy.

use tracing::Instrument;

use chronicle_observe::genai_attrs::{
    GEN_AI_RESPONSE_FINISH_REASONS, GEN_AI_USAGE_INPUT_TOKENS, GEN_AI_USAGE_OUTPUT_TOKENS,
    OP_GENERATE_CONTENT,
};
use chronicle_types::config::ProviderConfig;
use chronicle_types::error::GatewayError;
use chronicle_types::llm::{CompletionRequest, Message, StopReason};

use crate::llm::box_provider::BoxLlmProvider;

/// Text returned by [`ModelGateway::call_model`] when the model produced nothing.
pub const EMPTY_OUTPUT_MARKER: &str = "AI failed to generate content.";

/// Prefix of the text returned by [`ModelGateway::call_model`] on any other failure.
pub const ERROR_PREFIX: &str = "AI Error:";

/// Per-call request settings, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySettings {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: Option<f64>,
}

impl From<&ProviderConfig> for GatewaySettings {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        }
    }
}

/// Wraps the configured provider. Stateless between calls.
pub struct ModelGateway {
    provider: BoxLlmProvider,
    settings: GatewaySettings,
}

impl ModelGateway {
    pub fn new(provider: BoxLlmProvider, settings: GatewaySettings) -> Self {
        Self { provider, settings }
    }

    /// Model identifier sent with every call.
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send `prompt` as a single user message and return the generated text.
    ///
    /// An empty or whitespace-only answer is an error, as is an answer the
    /// provider cut off on safety grounds with nothing left to show.
    pub async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: self.settings.max_output_tokens,
            temperature: self.settings.temperature,
        };

        let span = tracing::info_span!(
            "gen_ai.generate_content",
            gen_ai.operation.name = OP_GENERATE_CONTENT,
            gen_ai.provider.name = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.usage.input_tokens = tracing::field::Empty,
            gen_ai.usage.output_tokens = tracing::field::Empty,
            gen_ai.response.finish_reasons = tracing::field::Empty,
        );

        let response = self
            .provider
            .complete(&request)
            .instrument(span.clone())
            .await?;

        span.record(GEN_AI_USAGE_INPUT_TOKENS, response.usage.input_tokens);
        span.record(GEN_AI_USAGE_OUTPUT_TOKENS, response.usage.output_tokens);
        span.record(
            GEN_AI_RESPONSE_FINISH_REASONS,
            tracing::field::display(&response.stop_reason),
        );

        if response.content.trim().is_empty() {
            return Err(match response.stop_reason {
                StopReason::ContentFilter => GatewayError::ContentFiltered,
                _ => GatewayError::EmptyResponse,
            });
        }

        Ok(response.content)
    }

    /// Like [`generate`](Self::generate), but never fails.
    pub async fn call_model(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(provider = self.provider.name(), error = %err, "Model call failed");
                render_failure(&err)
            }
        }
    }
}

/// Marker text for a failed call.
pub fn render_failure(err: &GatewayError) -> String {
    if err.is_empty_output() {
        EMPTY_OUTPUT_MARKER.to_string()
    } else {
        format!("{ERROR_PREFIX} {err}")
    }
}
