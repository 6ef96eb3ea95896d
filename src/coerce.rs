use serde_json::Value;

use crate::meta::Kind;

/// Convert a raw flag, env or default string into a JSON value.
///
/// String fields take the raw text verbatim. Everything else is parsed as a
/// single JSON literal: `8080`, `true`, `1.5`, `null`, `"quoted"`, `[1, 2]`,
/// `{"k": "v"}`. Whether the literal fits the field's Rust type is decided
/// later, when the resolved tree is deserialized into the target.
pub fn coerce(kind: Kind, raw: &str) -> Result<Value, serde_json::Error> {
    if kind == Kind::String {
        return Ok(Value::String(raw.to_string()));
    }
    serde_json::from_str(raw)
}
