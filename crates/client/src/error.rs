//! Error types for the Trellix client.
//!
//! Each HTTP round trip reports failure through its own error type:
//! [`AuthError`] for the token request and [`FetchError`] for the alerts
//! request. Both wrap a [`RequestError`] that carries the HTTP status and
//! response body when they are available. [`ClientError`] unifies them for
//! callers that drive the whole flow.
//!
//! No variant is retryable; every error is terminal for the call that produced it.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failure of a single HTTP round trip.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Transport-level failure (connect, TLS, timeout) or request build error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}) at {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// The server answered 2xx but the body was not the expected JSON.
    #[error("Invalid response format ({status}): {message}")]
    Decode {
        status: u16,
        body: String,
        message: String,
    },
}

impl RequestError {
    /// HTTP status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Status { status, .. } | Self::Decode { status, .. } => Some(*status),
        }
    }

    /// Response body text, if a response body was read.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http(_) => None,
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body),
        }
    }
}

/// Token acquisition failed.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A required credential was empty; no request was sent.
    #[error("Missing credential: {0} must not be empty")]
    MissingCredential(&'static str),

    /// The token request failed.
    #[error("Token request failed: {0}")]
    Request(#[from] RequestError),

    /// The token endpoint answered 2xx without a usable access token.
    #[error("Token response did not contain an access token")]
    EmptyToken,
}

impl AuthError {
    /// HTTP status code of the token response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status(),
            _ => None,
        }
    }

    /// Body of the token response, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Request(e) => e.body(),
            _ => None,
        }
    }
}

/// Alert retrieval failed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The access token was empty; no request was sent.
    #[error("Access token is empty, refusing to send an empty bearer credential")]
    EmptyToken,

    /// The configured API key is not a valid header value; no request was sent.
    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,

    /// The alerts request failed.
    #[error("Alert request failed: {0}")]
    Request(#[from] RequestError),
}

impl FetchError {
    /// HTTP status code of the alerts response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status(),
            _ => None,
        }
    }

    /// Body of the alerts response, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Request(e) => e.body(),
            _ => None,
        }
    }
}

/// Errors that can occur during Trellix client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Token acquisition failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Alert retrieval failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The client was built without credentials.
    #[error("Client credentials are required")]
    MissingCredentials,

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ClientError {
    /// Check if this error came from the token step.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::MissingCredentials)
    }

    /// HTTP status code of the failing response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth(e) => e.status(),
            Self::Fetch(e) => e.status(),
            _ => None,
        }
    }

    /// Body of the failing response, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Auth(e) => e.body(),
            Self::Fetch(e) => e.body(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16, body: &str) -> RequestError {
        RequestError::Status {
            status,
            url: "https://auth.example.com/token".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_request_error_exposes_status_and_body() {
        let err = status_error(401, r#"{"error":"invalid_client"}"#);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some(r#"{"error":"invalid_client"}"#));

        let err = RequestError::Decode {
            status: 200,
            body: "not json".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.body(), Some("not json"));
    }

    #[test]
    fn test_auth_error_delegates_detail() {
        let err = AuthError::from(status_error(401, "denied"));
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some("denied"));

        assert_eq!(AuthError::EmptyToken.status(), None);
        assert_eq!(AuthError::MissingCredential("client_id").body(), None);
    }

    #[test]
    fn test_fetch_error_delegates_detail() {
        let err = FetchError::from(status_error(403, "forbidden"));
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.body(), Some("forbidden"));
        assert_eq!(FetchError::EmptyToken.status(), None);
    }

    #[test]
    fn test_client_error_is_auth_error() {
        let err = ClientError::from(AuthError::EmptyToken);
        assert!(err.is_auth_error());
        assert!(ClientError::MissingCredentials.is_auth_error());

        let err = ClientError::from(FetchError::EmptyToken);
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_client_error_display_is_transparent() {
        let err = ClientError::from(AuthError::from(status_error(401, "nope")));
        assert_eq!(
            err.to_string(),
            "Token request failed: API error (401) at https://auth.example.com/token: nope"
        );
        assert_eq!(err.status(), Some(401));
    }
}
