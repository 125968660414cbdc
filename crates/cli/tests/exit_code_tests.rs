//! Integration tests for structured exit codes.
//!
//! These tests verify that trellix-cli returns the correct exit code for the
//! step that failed, enabling reliable shell scripting.

mod common;

use common::{ALERTS_PATH, TOKEN_PATH, trellix_cmd, trellix_cmd_with_server};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token failures return exit code 2 and never call the alerts endpoint.
#[tokio::test]
async fn test_token_failure_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_client"}"#))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ALERTS_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    trellix_cmd_with_server(&server.uri())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to obtain token"))
        .stderr(predicate::str::contains("invalid_client"));
}

/// An empty access token counts as a token failure.
#[tokio::test]
async fn test_empty_token_returns_exit_code_2() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": ""})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    trellix_cmd_with_server(&server.uri())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to obtain token"));
}

/// Connection refused on the token endpoint is a token failure.
#[test]
fn test_connection_refused_returns_exit_code_2() {
    trellix_cmd_with_server("http://127.0.0.1:1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to obtain token"));
}

/// Alerts failures return exit code 3 after exactly one alerts request.
#[tokio::test]
async fn test_alerts_failure_returns_exit_code_3() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "T"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ALERTS_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    trellix_cmd_with_server(&server.uri())
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to fetch alerts"));
}

/// Missing credentials are a configuration error and send nothing.
#[tokio::test]
async fn test_missing_client_id_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    trellix_cmd_with_server(&server.uri())
        .env_remove("client_id")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}

#[test]
fn test_blank_secret_returns_exit_code_1() {
    trellix_cmd()
        .env("secret", "   ")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}

#[test]
fn test_invalid_url_returns_exit_code_1() {
    trellix_cmd()
        .args(["--alerts-url", "not a url"])
        .assert()
        .code(1);
}

#[test]
fn test_zero_timeout_returns_exit_code_1() {
    trellix_cmd().args(["--timeout", "0"]).assert().code(1);
}

#[test]
fn test_invalid_metrics_bind_returns_exit_code_1() {
    trellix_cmd()
        .args(["--metrics-bind", "not-an-addr"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start metrics exporter"));
}

#[test]
fn test_malformed_param_is_rejected() {
    trellix_cmd()
        .args(["--param", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn test_secrets_not_printed_on_failure() {
    trellix_cmd_with_server("http://127.0.0.1:1")
        .env("secret", "very-secret-value")
        .env("trellix_api", "very-secret-key")
        .env("RUST_LOG", "trellix_client=debug,trellix_cli=debug")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("very-secret-value").not())
        .stderr(predicate::str::contains("very-secret-key").not());
}
