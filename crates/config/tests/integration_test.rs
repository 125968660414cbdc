//! Integration tests for configuration loading from the CLI entrypoint's point of view.
//!
//! These tests verify end-to-end config loading behavior, ensuring that
//! the ConfigLoader builder chain works correctly.

use secrecy::ExposeSecret;
use trellix_config::constants::{DEFAULT_ALERTS_URL, DEFAULT_TOKEN_URL};
use trellix_config::{ConfigError, ConfigLoader, env_var_or_none};

/// Builder methods (simulating CLI args) produce a complete config.
#[test]
fn test_config_loader_cli_overrides() {
    let config = ConfigLoader::new()
        .with_client_id("cli-client".to_string())
        .with_client_secret("cli-secret".to_string())
        .with_scope("edr.read".to_string())
        .with_api_key("cli-api-key".to_string())
        .build()
        .expect("should build with CLI overrides");

    assert_eq!(config.auth.credentials.client_id, "cli-client");
    assert_eq!(config.auth.credentials.client_secret.expose_secret(), "cli-secret");
    assert_eq!(config.auth.credentials.scope, "edr.read");
    assert_eq!(
        config.auth.api_key.as_ref().map(|k| k.expose_secret()),
        Some("cli-api-key")
    );
    assert_eq!(config.connection.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.connection.alerts_url, DEFAULT_ALERTS_URL);
}

/// env_var_or_none is exported from the crate root.
#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("trellix_api");
}

/// Missing credentials surface as a clear error rather than a panic.
#[test]
fn test_missing_credentials_error_message() {
    let err = ConfigLoader::new().build().unwrap_err();
    assert!(matches!(err, ConfigError::MissingValue("client_id")));
    assert_eq!(
        err.to_string(),
        "Missing required configuration: client_id"
    );
}

/// Config errors never echo the secret that was configured.
#[test]
fn test_config_error_does_not_expose_secret() {
    let err = ConfigLoader::new()
        .with_client_id("client".to_string())
        .with_client_secret("very-secret-value".to_string())
        .with_token_url("not a url".to_string())
        .build()
        .unwrap_err();

    let rendered = format!("{err} {err:?}");
    assert!(!rendered.contains("very-secret-value"));
}

/// Config Debug output redacts both the client secret and the API key.
#[test]
fn test_config_debug_redacts_secrets() {
    let config = ConfigLoader::new()
        .with_client_id("client".to_string())
        .with_client_secret("client-secret-xyz".to_string())
        .with_api_key("api-key-xyz".to_string())
        .build()
        .unwrap();

    let debug_output = format!("{:?}", config);
    assert!(!debug_output.contains("client-secret-xyz"));
    assert!(!debug_output.contains("api-key-xyz"));
}
