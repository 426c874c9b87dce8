//! LLM provider implementations.
//!
//! Contains concrete implementations of the [`LlmProvider`] trait defined
//! in `chronicle-core`: the native Gemini client and a generic
//! OpenAI-compatible client.
//!
//! Also provides a provider factory ([`create_provider`]) that constructs
//! the right provider from a [`ProviderConfig`], and [`build_gateway`] which
//! wires the provider into a [`ModelGateway`].
//!
//! [`LlmProvider`]: chronicle_core::llm::provider::LlmProvider

pub mod gemini;
pub mod openai_compat;

use secrecy::SecretString;

use chronicle_core::gateway::{GatewaySettings, ModelGateway};
use chronicle_core::llm::box_provider::BoxLlmProvider;
use chronicle_types::config::ProviderConfig;
use chronicle_types::llm::ProviderType;

use self::gemini::GeminiProvider;
use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{OpenAiCompatConfig, gemini_defaults};

/// Create a [`BoxLlmProvider`] from a [`ProviderConfig`].
///
/// Never fails: a missing API key still yields a provider, whose calls are
/// rejected with an authentication error.
///
/// For `openai_compatible` without a `base_url`, Gemini models go to
/// Gemini's compatibility endpoint and everything else to OpenAI.
pub fn create_provider(config: &ProviderConfig, api_key: Option<SecretString>) -> BoxLlmProvider {
    match config.kind {
        ProviderType::Gemini => {
            let mut provider = GeminiProvider::new(api_key, config.model.clone());
            if let Some(base_url) = config.base_url.as_deref() {
                provider = provider.with_base_url(base_url.to_string());
            }
            BoxLlmProvider::new(provider)
        }
        ProviderType::OpenAiCompatible => {
            let oai_config = match config.base_url.as_deref() {
                Some(base_url) => OpenAiCompatConfig::new(Some(base_url), api_key, &config.model),
                None if config.model.starts_with("gemini") => {
                    gemini_defaults(api_key, &config.model)
                }
                None => OpenAiCompatConfig::new(None, api_key, &config.model),
            };
            BoxLlmProvider::new(OpenAiCompatibleProvider::new(oai_config))
        }
    }
}

/// Build the [`ModelGateway`] for `config`.
pub fn build_gateway(config: &ProviderConfig, api_key: Option<SecretString>) -> ModelGateway {
    let provider = create_provider(config, api_key);
    tracing::debug!(
        provider = provider.name(),
        model = %config.model,
        "Model provider created"
    );
    ModelGateway::new(provider, GatewaySettings::from(config))
}
