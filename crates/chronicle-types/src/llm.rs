//! LLM request/response types for Chronicle.
//!
//! These types model the data shapes for provider interactions in a
//! wire-neutral way: each concrete provider converts them to and from its
//! own API format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in an LLM conversation. Every call is a single user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// A user turn carrying `content`.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response from an LLM provider for a non-streaming completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub content: String,
    pub model: String,
    pub stop_reason: StopReason,
    pub usage: Usage,
}

/// Reason why the LLM stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    /// The provider withheld or truncated output on safety grounds.
    ContentFilter,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EndTurn => write!(f, "end_turn"),
            StopReason::MaxTokens => write!(f, "max_tokens"),
            StopReason::ContentFilter => write!(f, "content_filter"),
        }
    }
}

/// Token usage for a completion request/response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Type of LLM provider backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// Google Gemini `generateContent` API.
    #[default]
    Gemini,
    /// Any OpenAI-compatible chat completions endpoint.
    #[serde(rename = "openai_compatible")]
    OpenAiCompatible,
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderType::Gemini => write!(f, "gemini"),
            ProviderType::OpenAiCompatible => write!(f, "openai_compatible"),
        }
    }
}

impl FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(ProviderType::Gemini),
            "openai_compatible" => Ok(ProviderType::OpenAiCompatible),
            other => Err(format!("invalid provider type: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_roundtrip() {
        for pt in [ProviderType::Gemini, ProviderType::OpenAiCompatible] {
            let s = pt.to_string();
            let parsed: ProviderType = s.parse().unwrap();
            assert_eq!(pt, parsed);
        }
        assert!("bedrock".parse::<ProviderType>().is_err());
    }

    #[test]
    fn test_provider_type_serde_names() {
        let json = serde_json::to_string(&ProviderType::OpenAiCompatible).unwrap();
        assert_eq!(json, "\"openai_compatible\"");
        let parsed: ProviderType = serde_json::from_str("\"gemini\"").unwrap();
        assert_eq!(parsed, ProviderType::Gemini);
    }

    #[test]
    fn test_completion_request_skips_absent_options() {
        let request = CompletionRequest {
            model: "gemini-2.0-flash".to_string(),
            messages: vec![Message::user("Tell me a story")],
            max_tokens: 256,
            temperature: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_message_role_and_stop_reason_names() {
        assert_eq!(MessageRole::User.to_string(), "user");
        assert_eq!(serde_json::to_value(MessageRole::User).unwrap(), "user");
        assert_eq!(StopReason::ContentFilter.to_string(), "content_filter");
        assert_eq!(
            serde_json::to_value(StopReason::MaxTokens).unwrap(),
            "max_tokens"
        );
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::RateLimited {
            retry_after_ms: Some(1500),
        };
        assert!(err.to_string().contains("1500"));
        assert_eq!(
            LlmError::Overloaded("busy".into()).to_string(),
            "provider overloaded: busy"
        );
    }
}
