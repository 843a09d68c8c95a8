//! JSON value helpers for layered configuration.

use serde_json::Value;

/// Deep merge two values.
/// Recursively merges objects, with overlay values taking precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}

/// Get value at a path in dotted notation.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;

    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            Value::Array(arr) => {
                let index: usize = part.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge() {
        let base = json!({"log_root": "", "levels": {"450": "AUDIT"}});
        let overlay = json!({"log_root": "/var/log/", "levels": {"150": "TRACE"}});
        let merged = deep_merge(base, overlay);
        assert_eq!(
            merged,
            json!({"log_root": "/var/log/", "levels": {"450": "AUDIT", "150": "TRACE"}})
        );
    }

    #[test]
    fn test_get_path() {
        let value = json!({"levels": {"450": "AUDIT"}, "list": [1, 2]});
        assert_eq!(get_path(&value, "levels.450"), Some(&json!("AUDIT")));
        assert_eq!(get_path(&value, "list.1"), Some(&json!(2)));
        assert_eq!(get_path(&value, "levels.999"), None);
    }
}
