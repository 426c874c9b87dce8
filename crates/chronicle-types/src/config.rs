//! Service configuration types for Chronicle.
//!
//! `ServiceConfig` represents the optional `chronicle.toml` that controls the
//! listen address, the remote model, and how model failures reach HTTP
//! callers. All fields have defaults matching the service's historical
//! behavior (port 5000 on all interfaces, `gemini-2.0-flash`).

use serde::{Deserialize, Serialize};

use crate::llm::ProviderType;

/// Top-level configuration for the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// How a failed model call is reported to HTTP callers.
    #[serde(default)]
    pub model_errors: ModelErrorPolicy,

    /// Remote model settings.
    #[serde(default)]
    pub provider: ProviderConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model_errors: ModelErrorPolicy::default(),
            provider: ProviderConfig::default(),
        }
    }
}

/// Which remote model to call and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Wire protocol of the remote API.
    #[serde(default)]
    pub kind: ProviderType,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Override for the API base URL (proxies, self-hosted endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Upper bound on generated tokens per call.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature; the provider default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_max_output_tokens() -> u32 {
    2048
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderType::default(),
            model: default_model(),
            base_url: None,
            api_key_env: default_api_key_env(),
            max_output_tokens: default_max_output_tokens(),
            temperature: None,
        }
    }
}

/// Reporting policy for model failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelErrorPolicy {
    /// Return the error marker text as generated content with HTTP 200.
    #[default]
    Inline,
    /// Return HTTP 502 with an `{"error": ...}` body.
    Status,
}
