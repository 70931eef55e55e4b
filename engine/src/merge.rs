//! Recursive merge of JSON documents.
//!
//! Objects merge key by key. Every other value, arrays included, replaces the base value
//! wholesale. Keys missing from the patch keep their base value, so merging any patch onto a
//! complete document yields a complete document.

use crate::error::{CanvasError, CanvasResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn merge_values(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => merge_values(base_value, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}

/// Typed deep merge: `base` and `patch` are merged as JSON and read back as `T`.
///
/// Fails with [`CanvasError::InvalidFormat`] when the merged document no longer fits `T`,
/// e.g. a string where a number is expected. `base` is never modified.
pub fn deep_merge<T, P>(base: &T, patch: &P) -> CanvasResult<T>
where
    T: Serialize + DeserializeOwned,
    P: Serialize + ?Sized,
{
    let mut merged = serde_json::to_value(base).map_err(CanvasError::Serialize)?;
    let patch = serde_json::to_value(patch).map_err(CanvasError::Serialize)?;
    merge_values(&mut merged, &patch);
    serde_json::from_value(merged).map_err(|err| {
        CanvasError::InvalidFormat(format!("merged document does not match the schema: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_objects_merge_and_preserve_siblings() {
        let mut base = json!({ "a": { "b": 1, "c": 2 }, "d": 3 });
        merge_values(&mut base, &json!({ "a": { "b": 10 } }));
        assert_eq!(base, json!({ "a": { "b": 10, "c": 2 }, "d": 3 }));
    }

    #[test]
    fn arrays_are_replaced_not_concatenated() {
        let mut base = json!({ "colors": ["#000", "#111", "#222", "#333"] });
        merge_values(&mut base, &json!({ "colors": ["#fff"] }));
        assert_eq!(base, json!({ "colors": ["#fff"] }));
    }

    #[test]
    fn scalar_replaces_object_and_object_replaces_scalar() {
        let mut base = json!({ "a": { "b": 1 }, "c": 5 });
        merge_values(&mut base, &json!({ "a": 2, "c": { "x": true } }));
        assert_eq!(base, json!({ "a": 2, "c": { "x": true } }));
    }

    #[test]
    fn unknown_keys_are_added() {
        let mut base = json!({ "a": 1 });
        merge_values(&mut base, &json!({ "z": null }));
        assert_eq!(base, json!({ "a": 1, "z": null }));
    }
}
