//! Connection configuration types for the Trellix EDR client.
//!
//! Responsibilities:
//! - Define endpoint URLs and HTTP transport settings.
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `ConnectionConfig::default()` targets the production Trellix endpoints.

use crate::constants::{DEFAULT_ALERTS_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_URL};
use crate::types::auth::{AuthConfig, Credentials};
use secrecy::SecretString;
use std::time::Duration;

/// Endpoint and transport settings.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// OAuth2 token endpoint.
    pub token_url: String,
    /// EDR alerts endpoint.
    pub alerts_url: String,
    /// Whether to skip TLS verification (for intercepting proxies in lab setups)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            alerts_url: DEFAULT_ALERTS_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for the production endpoints with the given credentials.
    pub fn with_credentials(credentials: Credentials, api_key: Option<SecretString>) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig {
                credentials,
                api_key,
            },
        }
    }
}
