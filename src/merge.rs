//! default overrides
//!
//! shallow merge of caller-supplied values onto a mutation's default input.

use serde_json::{Map, Value};

/// object of graphql input values
pub type Variables = Map<String, Value>;

/// replace top-level keys of `defaults` with the values in `overrides`.
///
/// there is no recursive merge: a nested object in `defaults` is replaced
/// wholesale, so every nested field the mutation needs must be supplied again.
/// keys whose nested default was replaced this way are logged and returned.
pub fn override_defaults(defaults: &mut Variables, overrides: Variables) -> Vec<String> {
    let mut replaced_nested = Vec::new();

    for (key, value) in overrides {
        if matches!(defaults.get(&key), Some(Value::Object(_))) {
            tracing::warn!(
                key = %key,
                "override replaces a nested default object; supply every nested field"
            );
            replaced_nested.push(key.clone());
        }
        defaults.insert(key, value);
    }

    replaced_nested
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Variables {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_override_subset_of_keys() {
        let mut defaults = object(json!({"name": "default", "sku": "0", "basePrice": 0.0}));
        let nested = override_defaults(&mut defaults, object(json!({"sku": "ABC-1"})));

        assert!(nested.is_empty());
        assert_eq!(
            Value::Object(defaults),
            json!({"name": "default", "sku": "ABC-1", "basePrice": 0.0})
        );
    }

    #[test]
    fn test_override_adds_new_keys() {
        let mut defaults = object(json!({"name": "default"}));
        override_defaults(&mut defaults, object(json!({"slug": "shoes"})));

        assert_eq!(defaults["name"], "default");
        assert_eq!(defaults["slug"], "shoes");
    }

    #[test]
    fn test_override_nested_object_is_replaced_wholesale() {
        let mut defaults = object(json!({
            "name": "fake warehouse",
            "address": {"city": "Fake City", "country": "CH", "postalCode": "1024"}
        }));
        let nested = override_defaults(
            &mut defaults,
            object(json!({"address": {"city": "Zurich"}})),
        );

        assert_eq!(nested, vec!["address".to_string()]);
        assert_eq!(defaults["address"], json!({"city": "Zurich"}));
        assert_eq!(defaults["name"], "fake warehouse");
    }

    #[test]
    fn test_override_nested_with_scalar() {
        let mut defaults = object(json!({"address": {"city": "Fake City"}}));
        let nested = override_defaults(&mut defaults, object(json!({"address": null})));

        assert_eq!(nested, vec!["address".to_string()]);
        assert!(defaults["address"].is_null());
    }
}
