//! Main Trellix API client.
//!
//! This module provides the [`TrellixClient`] facade over the two endpoint
//! functions. The client owns its configuration; each call is an independent
//! round trip.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `token`: Token acquisition
//! - `alerts`: Alert retrieval and the token-then-alerts flow
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token caching or refresh (every flow acquires a fresh token)
//!
//! # Invariants
//! - Alerts are only requested with a token from a successful, non-empty token response

pub mod builder;

mod alerts;
mod token;

use secrecy::SecretString;
use trellix_config::Credentials;

use crate::metrics::MetricsCollector;

/// Trellix API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use trellix_client::{Credentials, TrellixClient};
/// use secrecy::SecretString;
///
/// let client = TrellixClient::builder()
///     .credentials(Credentials::new(
///         "my-client-id",
///         SecretString::new("my-secret".to_string().into()),
///         "edr.read",
///     ))
///     .api_key(SecretString::new("my-api-key".to_string().into()))
///     .build()?;
///
/// let alerts = client.acquire_token_and_fetch_alerts(None).await?;
/// ```
#[derive(Debug)]
pub struct TrellixClient {
    pub(crate) http: reqwest::Client,
    pub(crate) token_url: String,
    pub(crate) alerts_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) api_key: Option<SecretString>,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl TrellixClient {
    /// Create a new client builder.
    pub fn builder() -> builder::TrellixClientBuilder {
        builder::TrellixClientBuilder::new()
    }

    /// Token endpoint URL.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Alerts endpoint URL.
    pub fn alerts_url(&self) -> &str {
        &self.alerts_url
    }

    /// Whether an API key will be sent with alert requests.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
