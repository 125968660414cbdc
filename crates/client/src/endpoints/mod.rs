//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP round trip against a caller
//! supplied URL. They never print, never retry and hold no state.

mod alerts;
mod auth;
mod request;

pub use alerts::{ALERTS_ENDPOINT, fetch_alerts};
pub use auth::{TOKEN_ENDPOINT, acquire_token};
pub use request::{read_json, send_request};
