//! Service configuration loader for Chronicle.
//!
//! Reads an optional TOML file and deserializes it into [`ServiceConfig`].
//! Falls back to defaults when the file is missing or malformed, then
//! applies `CHRONICLE_*` environment overrides.

use std::path::Path;

use chronicle_types::config::{ModelErrorPolicy, ServiceConfig};

/// Config file used when neither `--config` nor `CHRONICLE_CONFIG` is given.
pub const DEFAULT_CONFIG_FILE: &str = "chronicle.toml";

pub const ENV_HOST: &str = "CHRONICLE_HOST";
pub const ENV_PORT: &str = "CHRONICLE_PORT";
pub const ENV_MODEL: &str = "CHRONICLE_MODEL";
pub const ENV_MODEL_ERRORS: &str = "CHRONICLE_MODEL_ERRORS";

/// Load service configuration from `path`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_service_config(path: &Path) -> ServiceConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServiceConfig::default()
        }
    }
}

/// Apply `CHRONICLE_*` overrides read through `lookup`.
///
/// Invalid values are logged and skipped.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(ENV_HOST) {
        config.host = host;
    }

    if let Some(port) = lookup(ENV_PORT) {
        match port.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(err) => tracing::warn!("Ignoring {ENV_PORT}={port}: {err}"),
        }
    }

    if let Some(model) = lookup(ENV_MODEL) {
        config.provider.model = model;
    }

    if let Some(policy) = lookup(ENV_MODEL_ERRORS) {
        match policy.as_str() {
            "inline" => config.model_errors = ModelErrorPolicy::Inline,
            "status" => config.model_errors = ModelErrorPolicy::Status,
            other => tracing::warn!("Ignoring {ENV_MODEL_ERRORS}={other}: expected inline or status"),
        }
    }
}

/// Load `path`, then apply overrides from the process environment.
pub async fn resolve_service_config(path: &Path) -> ServiceConfig {
    let mut config = load_service_config(path).await;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}
