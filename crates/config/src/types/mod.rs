//! Configuration type definitions for the Trellix EDR client.
//!
//! Responsibilities:
//! - Define credential and API key types used by the token and alerts calls.
//! - Define endpoint and transport settings (URLs, timeout, TLS verification).
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections or the token exchange (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;

pub use auth::{AuthConfig, Credentials};
pub use connection::{Config, ConnectionConfig};
