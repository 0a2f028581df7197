use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Looks up a named member on an arbitrary decoded value.
///
/// Returns `Some` iff the value is a JSON object carrying the key. Null,
/// primitives, and arrays cannot carry named members, so probing them
/// yields `None` rather than a panic; a missing field is an observable
/// state, not an error.
pub fn get_property<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(name))
}

/// Existence-only form of [`get_property`].
pub fn has_property(value: &Value, name: &str) -> bool {
    get_property(value, name).is_some()
}

/// Deserializes a field that distinguishes a missing key from an explicit
/// null.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// a missing key stays `None`, `null` becomes `Some(None)`, and a value
/// becomes `Some(Some(v))`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_property_reads_object_members() {
        let value = json!({"id": "abc_1", "nested": {"inner": 1}});
        assert_eq!(get_property(&value, "id"), Some(&json!("abc_1")));
        assert_eq!(get_property(&value, "missing"), None);
    }

    #[test]
    fn get_property_is_safe_on_non_objects() {
        assert_eq!(get_property(&Value::Null, "id"), None);
        assert_eq!(get_property(&json!(42), "id"), None);
        assert_eq!(get_property(&json!("abc"), "id"), None);
        assert_eq!(get_property(&json!(true), "id"), None);
        assert_eq!(get_property(&json!([1, 2, 3]), "0"), None);
    }

    #[test]
    fn has_property_distinguishes_null_from_missing() {
        let value = json!({"present": null});
        assert!(has_property(&value, "present"));
        assert!(!has_property(&value, "absent"));
    }

    #[test]
    fn double_option_separates_absent_null_and_value() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Wire {
            #[serde(default, deserialize_with = "double_option")]
            point: Option<Option<f64>>,
        }

        let absent: Wire = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.point, None);

        let null: Wire = serde_json::from_value(json!({"point": null})).unwrap();
        assert_eq!(null.point, Some(None));

        let value: Wire = serde_json::from_value(json!({"point": 100.0})).unwrap();
        assert_eq!(value.point, Some(Some(100.0)));
    }
}
