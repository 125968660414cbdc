//! Authentication types for Trellix configuration.
//!
//! Responsibilities:
//! - Define the OAuth2 client credentials triple.
//! - Hold the static API key sent with resource requests.
//!
//! Does NOT handle:
//! - The token exchange itself (see client crate).
//!
//! Invariants:
//! - `client_secret` and `api_key` never appear in `Debug` output.

use secrecy::SecretString;

/// OAuth2 client credentials used for the token request.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Client id, sent as the HTTP Basic username.
    pub client_id: String,
    /// Client secret, sent as the HTTP Basic password.
    pub client_secret: SecretString,
    /// Space separated scope identifiers (may be empty).
    pub scope: String,
}

impl Credentials {
    /// Create a credential triple.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: SecretString,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            scope: scope.into(),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Client credentials for the token endpoint.
    pub credentials: Credentials,
    /// API key sent as `x-api-key` on alert requests.
    pub api_key: Option<SecretString>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_credentials_new() {
        let creds = Credentials::new(
            "client",
            SecretString::new("shh".to_string().into()),
            "edr.read soc.act.tg",
        );

        assert_eq!(creds.client_id, "client");
        assert_eq!(creds.client_secret.expose_secret(), "shh");
        assert_eq!(creds.scope, "edr.read soc.act.tg");
    }

    /// Test that the client secret is not exposed in Debug output.
    #[test]
    fn test_client_secret_not_exposed_in_debug() {
        let secret = "super-secret-client-secret-123";
        let creds = Credentials::new(
            "client-id",
            SecretString::new(secret.to_string().into()),
            "edr.read",
        );

        let debug_output = format!("{:?}", creds);

        assert!(
            !debug_output.contains(secret),
            "Debug output should not contain the client secret"
        );
        // The client id is not a secret
        assert!(debug_output.contains("client-id"));
    }

    /// Test that the API key is not exposed in Debug output.
    #[test]
    fn test_api_key_not_exposed_in_debug() {
        let api_key = "api-key-value-456";
        let auth = AuthConfig {
            credentials: Credentials::new(
                "client-id",
                SecretString::new("secret".to_string().into()),
                "",
            ),
            api_key: Some(SecretString::new(api_key.to_string().into())),
        };

        let debug_output = format!("{:?}", auth);
        assert!(!debug_output.contains(api_key));
    }
}
