//! OAuth2 client credentials token endpoint.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::endpoints::{read_json, send_request};
use crate::error::AuthError;
use crate::metrics::MetricsCollector;
use crate::models::TokenResponse;

/// Endpoint label for logs and metrics.
pub const TOKEN_ENDPOINT: &str = "/auth/realms/IAM/protocol/openid-connect/token";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Exchange client credentials for an access token.
///
/// Sends one `POST` to `token_url` with HTTP Basic credentials and the form
/// body `grant_type=client_credentials&scope=<scope>`.
///
/// # Errors
///
/// - `AuthError::MissingCredential` if `client_id` or `client_secret` is blank (nothing is sent)
/// - `AuthError::Request` for transport failures, non-2xx responses and malformed bodies
/// - `AuthError::EmptyToken` if the response carries an empty `access_token`
pub async fn acquire_token(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &SecretString,
    scope: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<TokenResponse, AuthError> {
    if client_id.trim().is_empty() {
        return Err(AuthError::MissingCredential("client_id"));
    }
    if client_secret.expose_secret().trim().is_empty() {
        return Err(AuthError::MissingCredential("client_secret"));
    }

    debug!(client_id, scope, "Requesting access token");

    let builder = client
        .post(token_url)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .basic_auth(client_id, Some(client_secret.expose_secret()))
        .form(&[("grant_type", "client_credentials"), ("scope", scope)]);

    let response = send_request(builder, TOKEN_ENDPOINT, "POST", metrics).await?;
    let token: TokenResponse = read_json(response, TOKEN_ENDPOINT, metrics).await?;

    if token.access_token.expose_secret().trim().is_empty() {
        return Err(AuthError::EmptyToken);
    }

    debug!(
        token_type = token.token_type.as_deref().unwrap_or("unknown"),
        expires_in = ?token.expires_in,
        "Access token acquired"
    );

    Ok(token)
}
