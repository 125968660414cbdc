//! EDR alerts endpoint.
//!
//! # What this module handles:
//! - One authenticated `GET` of the alerts listing
//!
//! # What this module does NOT handle:
//! - Obtaining the token (see [`crate::endpoints::acquire_token`])
//! - Following `links.next` pagination

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::endpoints::{read_json, send_request};
use crate::error::FetchError;
use crate::metrics::MetricsCollector;
use crate::models::{AlertCollection, AlertQuery};

/// Endpoint label for logs and metrics.
pub const ALERTS_ENDPOINT: &str = "/edr/v2/alerts";

const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";
const API_KEY_HEADER: &str = "x-api-key";

/// Fetch the EDR alerts listing.
///
/// Sends one `GET` to `alerts_url` with `Authorization: Bearer <access_token>`,
/// `x-api-key: <api_key>` (omitted when `api_key` is None) and
/// `Content-Type: application/vnd.api+json`. Query parameters are appended
/// in the order given.
///
/// # Errors
///
/// - `FetchError::EmptyToken` if `access_token` is blank (nothing is sent)
/// - `FetchError::InvalidApiKey` if the API key is not a valid header value (nothing is sent)
/// - `FetchError::Request` for transport failures, non-2xx responses and malformed bodies
pub async fn fetch_alerts(
    client: &Client,
    alerts_url: &str,
    api_key: Option<&SecretString>,
    access_token: &SecretString,
    query: Option<&AlertQuery>,
    metrics: Option<&MetricsCollector>,
) -> Result<AlertCollection, FetchError> {
    let token = access_token.expose_secret();
    if token.trim().is_empty() {
        return Err(FetchError::EmptyToken);
    }

    let mut builder = client
        .get(alerts_url)
        .header(CONTENT_TYPE, JSON_API_CONTENT_TYPE)
        .bearer_auth(token);

    match api_key {
        Some(key) => {
            let mut value =
                HeaderValue::from_str(key.expose_secret()).map_err(|_| FetchError::InvalidApiKey)?;
            value.set_sensitive(true);
            builder = builder.header(API_KEY_HEADER, value);
        }
        None => warn!("No API key configured, sending alerts request without x-api-key"),
    }

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        builder = builder.query(query.as_slice());
    }

    debug!(
        params = query.map_or(0, AlertQuery::len),
        "Fetching EDR alerts"
    );

    let response = send_request(builder, ALERTS_ENDPOINT, "GET", metrics).await?;
    let alerts: AlertCollection = read_json(response, ALERTS_ENDPOINT, metrics).await?;

    debug!(count = alerts.len(), "Fetched EDR alerts");

    Ok(alerts)
}
