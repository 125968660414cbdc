//! Testing utilities for Trellix client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use trellix_client::testing::load_fixture;
//!
//! let fixture = load_fixture("alerts/list_alerts.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "token/success.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse_into_models() {
        let token: crate::models::TokenResponse =
            serde_json::from_value(load_fixture("token/success.json")).unwrap();
        assert_eq!(token.token_type.as_deref(), Some("Bearer"));

        let alerts: crate::models::AlertCollection =
            serde_json::from_value(load_fixture("alerts/list_alerts.json")).unwrap();
        assert_eq!(alerts.len(), 2);
    }
}
