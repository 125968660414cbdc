//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use trellix_client::testing::load_fixture;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::{ExposeSecret, SecretString};
#[allow(unused_imports)]
pub use trellix_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wrap a string in a `SecretString`.
#[allow(dead_code)]
pub fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

/// Token endpoint URL on the mock server.
#[allow(dead_code)]
pub fn token_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), endpoints::TOKEN_ENDPOINT)
}

/// Alerts endpoint URL on the mock server.
#[allow(dead_code)]
pub fn alerts_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), endpoints::ALERTS_ENDPOINT)
}
