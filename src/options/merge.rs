//! Base-driven recursive merge of configuration values.
//!
//! Config sections are merged as [`serde_json::Value`] trees before being
//! deserialized into their typed form. Which fields recurse is decided by
//! the variant of the *base* value: [`Value::Object`] fields are merged
//! key by key, every other variant is a leaf the override replaces.

use serde_json::{Map, Value};

/// Merge `overrides` over `base`, returning a new value.
///
/// The result carries exactly the keys of `base`. Keys that only appear in
/// `overrides` are dropped. For an object-typed base field the override's
/// field of the same name is merged recursively (a missing or non-object
/// override merges as empty). For a leaf field the override wins unless it
/// is absent or `null`.
#[must_use]
pub fn merge(overrides: &Value, base: &Value) -> Value {
    let Value::Object(base_fields) = base else {
        return pick_leaf(overrides, base);
    };

    let empty = Map::new();
    let override_fields = overrides.as_object().unwrap_or(&empty);

    let merged = base_fields
        .iter()
        .map(|(key, base_value)| {
            let override_value =
                override_fields.get(key).unwrap_or(&Value::Null);
            let value = if base_value.is_object() {
                merge(override_value, base_value)
            } else {
                pick_leaf(override_value, base_value)
            };
            (key.clone(), value)
        })
        .collect();

    Value::Object(merged)
}

fn pick_leaf(overrides: &Value, base: &Value) -> Value {
    if overrides.is_null() {
        base.clone()
    } else {
        overrides.clone()
    }
}
