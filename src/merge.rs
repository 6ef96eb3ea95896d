use serde_json::{Map, Value};

use crate::meta::{FieldKind, Meta};

/// Overlay resolved values onto the target's serialized state.
///
/// Walks `meta` rather than the raw maps, so only nested struct fields are
/// merged key by key. Leaf values replace what `base` holds wholesale, even
/// when they are maps or sequences. A nested field that is `null` or not an
/// object in `base` (an `Option<Sub>` set to `None`) becomes an object.
/// Keys in `base` that the schema does not mention are left alone.
pub fn overlay(base: &mut Map<String, Value>, mut resolved: Map<String, Value>, meta: &Meta) {
    for field in meta.fields {
        let Some(value) = resolved.remove(field.name) else {
            continue;
        };
        match (field.kind, value) {
            (FieldKind::Nested { meta }, Value::Object(children)) => {
                let slot = base.entry(field.name).or_insert(Value::Null);
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(slot) = slot {
                    overlay(slot, children, meta);
                }
            }
            (_, value) => {
                base.insert(field.name.to_string(), value);
            }
        }
    }
}
