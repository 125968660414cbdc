//! Centralized constants for the Trellix EDR client workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid magic string duplication.

// =============================================================================
// Endpoints
// =============================================================================

/// OAuth2 token endpoint for the client credentials grant.
pub const DEFAULT_TOKEN_URL: &str =
    "https://auth.trellix.com/auth/realms/IAM/protocol/openid-connect/token";

/// EDR alerts resource endpoint.
pub const DEFAULT_ALERTS_URL: &str = "https://api.manage.trellix.com/edr/v2/alerts";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// OAuth2 client id.
pub const ENV_CLIENT_ID: &str = "client_id";

/// OAuth2 client secret.
pub const ENV_CLIENT_SECRET: &str = "secret";

/// Space separated OAuth2 scopes.
pub const ENV_SCOPE: &str = "scope";

/// Value of the `x-api-key` header sent to the alerts endpoint.
pub const ENV_API_KEY: &str = "trellix_api";

/// Override for the token endpoint URL.
pub const ENV_TOKEN_URL: &str = "TRELLIX_TOKEN_URL";

/// Override for the alerts endpoint URL.
pub const ENV_ALERTS_URL: &str = "TRELLIX_ALERTS_URL";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "TRELLIX_TIMEOUT";

/// Skip TLS certificate verification (`true`/`false`).
pub const ENV_SKIP_VERIFY: &str = "TRELLIX_SKIP_VERIFY";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
