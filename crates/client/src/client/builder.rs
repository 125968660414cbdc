//! Client builder for constructing [`TrellixClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (credentials, endpoint URLs)
//! - Normalizing endpoint URLs (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - `credentials` must be provided before calling `build()`
//! - Endpoint URLs default to the production Trellix endpoints
//! - `skip_verify` only affects HTTPS connections; HTTP-only setups log a warning

use std::time::Duration;

use secrecy::SecretString;
use trellix_config::{
    Config, Credentials,
    constants::{DEFAULT_ALERTS_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_URL},
};

use crate::client::TrellixClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`TrellixClient`].
///
/// All options have defaults except `credentials`.
pub struct TrellixClientBuilder {
    token_url: String,
    alerts_url: String,
    credentials: Option<Credentials>,
    api_key: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for TrellixClientBuilder {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            alerts_url: DEFAULT_ALERTS_URL.to_string(),
            credentials: None,
            api_key: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl TrellixClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the token endpoint URL.
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Override the alerts endpoint URL.
    pub fn alerts_url(mut self, url: impl Into<String>) -> Self {
        self.alerts_url = url.into();
        self
    }

    /// Set the client credentials used for the token request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the API key sent as `x-api-key` with alert requests.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this behind a trusted intercepting proxy in a lab. Disabling
    /// TLS verification exposes the client secret and bearer token to
    /// man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.token_url = config.connection.token_url.clone();
        self.alerts_url = config.connection.alerts_url.clone();
        self.credentials = Some(config.auth.credentials.clone());
        self.api_key = config.auth.api_key.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Validate an endpoint URL and strip trailing slashes.
    fn normalize_url(url: &str) -> Result<String> {
        let parsed = reqwest::Url::parse(url.trim())
            .map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{url}: scheme must be http or https"
            )));
        }
        Ok(parsed.as_str().trim_end_matches('/').to_string())
    }

    /// Build the [`TrellixClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// - [`ClientError::MissingCredentials`] if credentials were not provided.
    /// - [`ClientError::InvalidUrl`] if an endpoint URL is not an absolute http(s) URL.
    /// - [`ClientError::HttpClient`] if the HTTP client fails to build.
    pub fn build(self) -> Result<TrellixClient> {
        let credentials = self.credentials.ok_or(ClientError::MissingCredentials)?;
        let token_url = Self::normalize_url(&self.token_url)?;
        let alerts_url = Self::normalize_url(&self.alerts_url)?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if token_url.starts_with("https://") || alerts_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build().map_err(ClientError::HttpClient)?;

        Ok(TrellixClient {
            http,
            token_url,
            alerts_url,
            credentials,
            api_key: self.api_key,
            metrics: self.metrics,
        })
    }
}
