//! OpenAI-compatible LLM provider implementation.
//!
//! A single [`OpenAiCompatibleProvider`] serves any endpoint that speaks the
//! OpenAI chat completions protocol: OpenAI itself, Gemini's compatibility
//! endpoint, or a local server. Uses [`async_openai`] for type-safe
//! request/response handling.

pub mod config;

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest, FinishReason,
};
use async_openai::Client;
use secrecy::ExposeSecret;

use chronicle_core::llm::provider::LlmProvider;
use chronicle_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use self::config::OpenAiCompatConfig;

/// Unified provider for any OpenAI-compatible API.
///
/// Does NOT derive Debug: the `async_openai::Client` holds the API key.
pub struct OpenAiCompatibleProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
    has_api_key: bool,
}

impl OpenAiCompatibleProvider {
    /// Create a new OpenAI-compatible provider from a configuration.
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_base(&config.base_url);
        if let Some(key) = config.api_key.as_ref() {
            openai_config = openai_config.with_api_key(key.expose_secret());
        }

        Self {
            client: Client::with_config(openai_config),
            provider_name: config.provider_name,
            model: config.model,
            has_api_key: config.api_key.is_some(),
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(|msg| {
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                    content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                    name: None,
                })
            })
            .collect();

        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        CreateChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        }
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if !self.has_api_key {
            return Err(LlmError::AuthenticationFailed);
        }

        let oai_request = self.build_request(request);

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        let first = response.choices.first();

        let content = first
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let stop_reason = first
            .and_then(|c| c.finish_reason.as_ref())
            .map(|fr| match fr {
                FinishReason::Length => StopReason::MaxTokens,
                FinishReason::ContentFilter => StopReason::ContentFilter,
                _ => StopReason::EndTurn,
            })
            .unwrap_or(StopReason::EndTurn);

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            stop_reason,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || code == "invalid_api_key"
                || api_err.message.contains("API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited {
                    retry_after_ms: None,
                }
            } else if code == "server_error" || error_type == "overloaded_error" {
                LlmError::Overloaded(api_err.message.clone())
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401 | 403) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited {
                retry_after_ms: None,
            },
            Some(503) => LlmError::Overloaded(err.to_string()),
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_types::llm::Message;
    use secrecy::SecretString;

    fn make_provider() -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new(OpenAiCompatConfig::new(
            None,
            Some(SecretString::from("sk-test")),
            "gpt-4o-mini",
        ))
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = make_provider();
        assert_eq!(provider.name(), "openai_compatible");
        assert_eq!(provider.model, "gpt-4o-mini");
        assert!(provider.has_api_key);
    }

    #[test]
    fn test_build_request_single_prompt() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![Message::user("Write a myth")],
            max_tokens: 2048,
            temperature: Some(0.5),
        };

        let oai_req = provider.build_request(&request);
        assert_eq!(oai_req.model, "gpt-4o");
        assert_eq!(oai_req.messages.len(), 1);
        assert_eq!(oai_req.max_completion_tokens, Some(2048));
        assert_eq!(oai_req.temperature, Some(0.5));
    }

    #[test]
    fn test_build_request_default_model() {
        let provider = make_provider();
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![Message::user("Hello")],
            max_tokens: 64,
            temperature: None,
        };

        let oai_req = provider.build_request(&request);
        assert_eq!(oai_req.model, "gpt-4o-mini");
        assert_eq!(oai_req.messages.len(), 1);
        assert!(matches!(
            oai_req.messages[0],
            ChatCompletionRequestMessage::User(_)
        ));
        assert!(oai_req.temperature.is_none());
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig::new(
            Some("http://127.0.0.1:9/v1"),
            None,
            "gpt-4o-mini",
        ));
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![Message::user("Hello")],
            max_tokens: 64,
            temperature: None,
        };
        assert!(matches!(
            provider.complete(&request).await,
            Err(LlmError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_map_openai_error_api_auth() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Incorrect API key provided".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: None,
            code: Some("invalid_api_key".to_string()),
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_map_openai_error_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Rate limit exceeded".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::RateLimited { .. }));
    }

    #[test]
    fn test_map_openai_error_invalid_argument() {
        use async_openai::error::OpenAIError;
        let err = map_openai_error(OpenAIError::InvalidArgument("bad arg".to_string()));
        match err {
            LlmError::Provider { message } => assert!(message.contains("bad arg")),
            other => panic!("Expected Provider, got: {other}"),
        }
    }

    #[test]
    fn test_map_openai_error_context_length_keeps_message() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "This model's maximum context length is 8192 tokens".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: None,
            code: Some("context_length_exceeded".to_string()),
        };
        match map_openai_error(OpenAIError::ApiError(api_err)) {
            LlmError::Provider { message } => assert!(message.contains("maximum context length")),
            other => panic!("Expected Provider, got: {other}"),
        }
    }
}
