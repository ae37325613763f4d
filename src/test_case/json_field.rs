use serde_json::Value;

/// Looks up a dotted path (`data.id`) in a json document and renders the
/// value as a string, so that a numeric `2` compares equal to `"2"`.
///
/// Returns `None` when a segment is missing or the value is `null`.
/// Array elements can be addressed by index (`data.0.id`).
pub fn extract_field(json: &Value, path: &str) -> Option<String> {
    let mut current_value = json;

    for key in path.split('.') {
        current_value = match current_value {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    match current_value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_key_extraction() {
        let body = json!({ "name": "John", "job": "leader" });
        assert_eq!(extract_field(&body, "name"), Some("John".to_string()));
        assert_eq!(extract_field(&body, "job"), Some("leader".to_string()));
    }

    #[test]
    fn test_nested_numeric_key_extraction() {
        let body = json!({ "data": { "id": 2, "email": "janet.weaver@reqres.in" } });
        assert_eq!(extract_field(&body, "data.id"), Some("2".to_string()));
    }

    #[test]
    fn test_array_index_extraction() {
        let body = json!({ "data": [{ "id": 7 }, { "id": 8 }] });
        assert_eq!(extract_field(&body, "data.1.id"), Some("8".to_string()));
        assert_eq!(extract_field(&body, "data.5.id"), None);
        assert_eq!(extract_field(&body, "data.first.id"), None);
    }

    #[test]
    fn test_key_not_found() {
        let body = json!({ "data": { "id": 2 } });
        assert_eq!(extract_field(&body, "data.name"), None);
        assert_eq!(extract_field(&body, "data.id.value"), None);
        assert_eq!(extract_field(&body, "support"), None);
    }

    #[test]
    fn test_null_and_bool_values() {
        let body = json!({ "deleted": null, "active": true });
        assert_eq!(extract_field(&body, "deleted"), None);
        assert_eq!(extract_field(&body, "active"), Some("true".to_string()));
    }
}
