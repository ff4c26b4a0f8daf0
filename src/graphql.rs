//! graphql types
//!
//! wrappers for graphql responses, top-level errors, and operation-scoped
//! error entries.

use serde::{Deserialize, Deserializer, Serialize};

/// graphql response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse<T> {
    /// response data or null if errors
    pub data: Option<T>,
    /// graphql errors array
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// true if the response contains graphql errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// top-level graphql error entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    /// error message
    pub message: String,
    /// error locations in the query
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<GraphQlLocation>,
    /// response path
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: Vec<serde_json::Value>,
    /// optional extensions payload
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

// servers may send `null` for optional lists
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// graphql error location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlLocation {
    /// line number (1-based)
    pub line: i64,
    /// column number (1-based)
    pub column: i64,
}

/// entry of an operation-scoped errors list (`shopErrors`, `productErrors`, ...)
///
/// saleor reports `field: null` for errors that are not tied to an input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationErrorEntry {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let ok: GraphQlResponse<serde_json::Value> = GraphQlResponse {
            data: Some(serde_json::json!({"ok": true})),
            errors: vec![],
        };
        assert!(!ok.has_errors());

        let err = GraphQlResponse::<serde_json::Value> {
            data: None,
            errors: vec![GraphQlError {
                message: "boom".to_string(),
                locations: vec![],
                path: vec![],
                extensions: None,
            }],
        };
        assert!(err.has_errors());
    }

    #[test]
    fn test_null_lists_keep_message() {
        let response: GraphQlResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": null,
                "errors": [{"message": "denied", "locations": null, "path": null}]
            }))
            .unwrap();
        assert_eq!(response.errors[0].message, "denied");
        assert!(response.errors[0].locations.is_empty());
        assert!(response.errors[0].path.is_empty());

        let response: GraphQlResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({"data": {"ok": true}, "errors": null}))
                .unwrap();
        assert!(!response.has_errors());
    }

    #[test]
    fn test_mutation_error_entry_optional_code() {
        let entries: Vec<MutationErrorEntry> = serde_json::from_value(serde_json::json!([
            {"field": "name", "message": "required"},
            {"field": null, "message": "denied", "code": "PERMISSION_DENIED"}
        ]))
        .unwrap();
        assert_eq!(entries[0].code, None);
        assert_eq!(entries[1].field, None);
        assert_eq!(entries[1].code.as_deref(), Some("PERMISSION_DENIED"));
    }
}
