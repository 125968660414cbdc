//! Shared test utilities for trellix-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (credentials, endpoint URLs).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Credentials are `c` / `s` with scope `edr.read` and API key `k` unless overridden.

use assert_cmd::Command;

/// Token path served by the mock server.
#[allow(dead_code)]
pub const TOKEN_PATH: &str = "/auth/realms/IAM/protocol/openid-connect/token";

/// Alerts path served by the mock server.
#[allow(dead_code)]
pub const ALERTS_PATH: &str = "/edr/v2/alerts";

/// Returns a hermetic `trellix-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Test credentials are set to satisfy config validation.
/// - Endpoint overrides and log filters from the host are cleared.
pub fn trellix_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("trellix-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("client_id", "c")
        .env("secret", "s")
        .env("scope", "edr.read")
        .env("trellix_api", "k");

    // Clear potential host leakage
    cmd.env_remove("TRELLIX_TOKEN_URL")
        .env_remove("TRELLIX_ALERTS_URL")
        .env_remove("TRELLIX_TIMEOUT")
        .env_remove("TRELLIX_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `trellix-cli` command pointed at a mock server.
#[allow(dead_code)]
pub fn trellix_cmd_with_server(server_uri: &str) -> Command {
    let mut cmd = trellix_cmd();
    cmd.env("TRELLIX_TOKEN_URL", format!("{server_uri}{TOKEN_PATH}"))
        .env("TRELLIX_ALERTS_URL", format!("{server_uri}{ALERTS_PATH}"));
    cmd
}
