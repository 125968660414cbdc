//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the credential, API key and connection variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Plain values are trimmed (leading/trailing whitespace removed).
//! - The client secret and API key are used verbatim, surrounding whitespace included.
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_ALERTS_URL, ENV_API_KEY, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_SCOPE, ENV_SKIP_VERIFY,
    ENV_TIMEOUT, ENV_TOKEN_URL,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read a secret environment variable verbatim.
///
/// Returns None if unset, empty, or whitespace-only. Otherwise the value is
/// kept exactly as set.
fn secret_var_or_none(key: &str) -> Option<SecretString> {
    std::env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(|s| SecretString::new(s.into()))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(client_id) = env_var_or_none(ENV_CLIENT_ID) {
        loader.set_client_id(Some(client_id));
    }
    if let Some(secret) = secret_var_or_none(ENV_CLIENT_SECRET) {
        loader.set_client_secret(Some(secret));
    }
    if let Some(scope) = env_var_or_none(ENV_SCOPE) {
        loader.set_scope(Some(scope));
    }
    if let Some(api_key) = secret_var_or_none(ENV_API_KEY) {
        loader.set_api_key(Some(api_key));
    }
    if let Some(url) = env_var_or_none(ENV_TOKEN_URL) {
        loader.set_token_url(Some(url));
    }
    if let Some(url) = env_var_or_none(ENV_ALERTS_URL) {
        loader.set_alerts_url(Some(url));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
