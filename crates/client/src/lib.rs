//! Trellix EDR REST API client.
//!
//! This crate exchanges OAuth2 client credentials for a bearer token and
//! fetches EDR alerts with that token. Each operation is a single HTTP round
//! trip; nothing is cached, retried or paginated.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::TrellixClient;
pub use client::builder::TrellixClientBuilder;
pub use error::{AuthError, ClientError, FetchError, RequestError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{AlertCollection, AlertQuery, TokenResponse};
pub use trellix_config::Credentials;
