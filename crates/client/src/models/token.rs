//! OAuth2 token response model.
//!
//! # What this module handles:
//! - Deserialization of the client credentials grant response
//!
//! # What this module does NOT handle:
//! - Token expiry tracking or refresh (tokens are used once and dropped)

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::time::Duration;

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into()))
}

/// Response body of the token endpoint.
///
/// Only `access_token` is required. Vendor specific fields
/// (`refresh_expires_in`, `not-before-policy`, ...) are kept in `extra`.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(deserialize_with = "deserialize_secret")]
    pub access_token: SecretString,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds as reported by the server.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TokenResponse {
    /// Token lifetime, if the server reported one.
    pub fn expires_after(&self) -> Option<Duration> {
        self.expires_in.map(Duration::from_secs)
    }
}

// Vendor fields may carry further credentials, so only their names are printed.
impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &self.access_token)
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}
