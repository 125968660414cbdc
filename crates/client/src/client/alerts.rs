//! Alert-related API methods for [`TrellixClient`].
//!
//! # What this module handles:
//! - Fetching alerts with a caller supplied token
//! - The sequential token-then-alerts flow
//!
//! # What this module does NOT handle:
//! - Low-level alert endpoint HTTP calls (in [`crate::endpoints`])

use secrecy::SecretString;
use tracing::debug;

use crate::client::TrellixClient;
use crate::endpoints;
use crate::error::{FetchError, Result};
use crate::models::{AlertCollection, AlertQuery};

impl TrellixClient {
    /// Fetch EDR alerts using `access_token`.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token from [`TrellixClient::acquire_token`]
    /// * `query` - Optional query parameters, sent verbatim and in order
    pub async fn fetch_alerts(
        &self,
        access_token: &SecretString,
        query: Option<&AlertQuery>,
    ) -> std::result::Result<AlertCollection, FetchError> {
        endpoints::fetch_alerts(
            &self.http,
            &self.alerts_url,
            self.api_key.as_ref(),
            access_token,
            query,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Acquire a token, then fetch alerts with it.
    ///
    /// The alerts request is only sent once the token request has succeeded
    /// with a non-empty token.
    pub async fn acquire_token_and_fetch_alerts(
        &self,
        query: Option<&AlertQuery>,
    ) -> Result<AlertCollection> {
        let token = self.acquire_token().await?;
        debug!("Token acquired, requesting alerts");
        Ok(self.fetch_alerts(&token.access_token, query).await?)
    }
}
