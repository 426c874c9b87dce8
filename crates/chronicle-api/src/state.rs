//! Application state shared by HTTP handlers and CLI commands.

use std::sync::Arc;

use chronicle_core::gateway::ModelGateway;
use chronicle_infra::llm::build_gateway;
use chronicle_infra::secret::resolve_api_key;
use chronicle_types::config::{ModelErrorPolicy, ServiceConfig};
use chronicle_types::error::GatewayError;

/// Shared application state.
///
/// Cheap to clone: the gateway sits behind an `Arc` and holds no mutable
/// state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ModelGateway>,
    pub model_errors: ModelErrorPolicy,
}

impl AppState {
    pub fn new(gateway: ModelGateway, model_errors: ModelErrorPolicy) -> Self {
        Self {
            gateway: Arc::new(gateway),
            model_errors,
        }
    }

    /// Resolve the API key and wire the configured provider.
    ///
    /// A missing key is not fatal: the service starts and every model call
    /// reports an authentication failure.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let api_key = resolve_api_key(&config.provider.api_key_env);
        if api_key.is_none() {
            tracing::warn!(
                var = %config.provider.api_key_env,
                "API key not set; model calls will fail"
            );
        }

        let gateway = build_gateway(&config.provider, api_key);
        Self::new(gateway, config.model_errors)
    }

    /// Run `prompt` through the gateway according to the error policy.
    ///
    /// Under [`ModelErrorPolicy::Inline`] this never fails.
    pub async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        match self.model_errors {
            ModelErrorPolicy::Inline => Ok(self.gateway.call_model(prompt).await),
            ModelErrorPolicy::Status => self.gateway.generate(prompt).await.inspect_err(|err| {
                tracing::warn!(
                    provider = self.gateway.provider_name(),
                    error = %err,
                    "Model call failed"
                );
            }),
        }
    }
}
