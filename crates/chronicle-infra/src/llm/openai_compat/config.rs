//! Configuration and well-known endpoints for OpenAI-compatible providers.

use secrecy::SecretString;

use chronicle_observe::genai_attrs::PROVIDER_OPENAI_COMPATIBLE;

/// OpenAI's own chat completions endpoint.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Gemini's OpenAI-compatible beta endpoint.
pub const GEMINI_OPENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name reported in logs and spans.
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key, if one was configured.
    pub api_key: Option<SecretString>,
    /// Default model identifier (e.g., "gpt-4o-mini").
    pub model: String,
}

impl OpenAiCompatConfig {
    /// Configuration for `base_url`, or OpenAI's endpoint when unset.
    pub fn new(base_url: Option<&str>, api_key: Option<SecretString>, model: &str) -> Self {
        Self {
            provider_name: PROVIDER_OPENAI_COMPATIBLE.into(),
            base_url: base_url.unwrap_or(OPENAI_BASE_URL).into(),
            api_key,
            model: model.into(),
        }
    }
}

/// Gemini through its OpenAI-compatible endpoint.
pub fn gemini_defaults(api_key: Option<SecretString>, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig::new(Some(GEMINI_OPENAI_BASE_URL), api_key, model)
}
