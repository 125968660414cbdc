//! EDR alert models.
//!
//! # What this module handles:
//! - Query parameters for the alerts listing
//! - Deserialization of the JSON:API alerts document
//!
//! # What this module does NOT handle:
//! - Interpreting individual alert records (they stay opaque JSON)
//! - Pagination (`links.next` is preserved but never followed)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters for the alerts request.
///
/// Parameters are sent in insertion order, without validation or renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertQuery {
    params: Vec<(String, String)>,
}

impl AlertQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter (builder form).
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Parameters in the order they will be sent.
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.params
    }
}

impl<K, V> FromIterator<(K, V)> for AlertQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Alerts listing as returned by `GET /edr/v2/alerts`.
///
/// `data` holds the alert records. `meta`, `links` and any other top-level
/// members are kept as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertCollection {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl AlertCollection {
    /// Number of alert records in `data`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
