//! Token acquisition for [`TrellixClient`].

use crate::client::TrellixClient;
use crate::endpoints;
use crate::error::AuthError;
use crate::models::TokenResponse;

impl TrellixClient {
    /// Exchange the configured client credentials for an access token.
    ///
    /// One request, no retry. The token is returned to the caller and not kept.
    pub async fn acquire_token(&self) -> Result<TokenResponse, AuthError> {
        endpoints::acquire_token(
            &self.http,
            &self.token_url,
            &self.credentials.client_id,
            &self.credentials.client_secret,
            &self.credentials.scope,
            self.metrics.as_ref(),
        )
        .await
    }
}
