use serde_json::{Map, Value};

/// Serializes `value` with object keys sorted at every depth, so equal
/// documents produce equal bytes regardless of construction order.
pub fn canonical_json_bytes(value: &Value) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&canonicalize(value))
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut keys = object.keys().collect::<Vec<_>>();
            keys.sort();
            let mut out = Map::new();
            for key in keys {
                out.insert(key.clone(), canonicalize(&object[key]));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        _ => value.clone(),
    }
}

#[cfg(test)]
#[path = "stable_json_test.rs"]
mod tests;
