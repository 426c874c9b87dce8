//! API key resolution from the process environment.
//!
//! The key is read once at startup from the variable named by
//! `provider.api_key_env`. A `.env` file in the working directory may seed
//! the environment first.

use secrecy::SecretString;

/// Load `.env` from the working directory, if present.
///
/// Returns the path that was loaded. An absent file is not an error; a
/// malformed one is logged and otherwise ignored.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(err) if err.not_found() => None,
        Err(err) => {
            tracing::warn!("Failed to load .env: {err}");
            None
        }
    }
}

/// Read the API key from the environment variable `var`.
///
/// Unset, empty, and non-Unicode values all count as missing.
pub fn resolve_api_key(var: &str) -> Option<SecretString> {
    match std::env::var(var) {
        Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        // Secrets must be valid strings
        Err(std::env::VarError::NotUnicode(_)) => None,
    }
}
