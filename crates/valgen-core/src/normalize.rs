//! Input document normalization.
//!
//! Converts a loosely-structured input document into the canonical [`Schema`].
//! Today this is a structural copy: the input is assumed to already be
//! JSON-Schema-shaped, and nothing is validated or defaulted beyond what the
//! emitters treat as absent. The stage exists as a seam so a richer input DSL
//! can slot in later without touching the emitters.
//!
//! Normalization never fails. Missing or ill-typed keys degrade to empty
//! defaults and surface as permissive output downstream, not as errors.

use serde_json::{Map, Number, Value};

use crate::schema::{PropertyKind, PropertySpec, Schema};

/// Build the canonical [`Schema`] from a raw input document.
pub fn normalize(raw: &Value) -> Schema {
    let properties = raw
        .get("properties")
        .and_then(Value::as_object)
        .map(normalize_properties)
        .unwrap_or_default();

    let required = raw
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let schema = Schema {
        properties,
        required,
    };
    tracing::debug!(
        properties = schema.properties.len(),
        required = schema.required.len(),
        "normalized input document"
    );
    schema
}

fn normalize_properties(
    props: &Map<String, Value>,
) -> indexmap::IndexMap<String, PropertySpec> {
    props
        .iter()
        .map(|(name, spec)| (name.clone(), normalize_property(spec)))
        .collect()
}

/// Structural copy of one property spec. Anything that is not an object
/// degrades to the empty spec (which renders as the accept-anything sentinel).
fn normalize_property(raw: &Value) -> PropertySpec {
    let Some(obj) = raw.as_object() else {
        return PropertySpec::default();
    };

    PropertySpec {
        kind: obj
            .get("type")
            .and_then(Value::as_str)
            .map(PropertyKind::from_tag),
        min_length: number_key(obj, "minLength"),
        max_length: number_key(obj, "maxLength"),
        pattern: string_key(obj, "pattern"),
        enum_values: obj.get("enum").and_then(Value::as_array).cloned(),
        format: string_key(obj, "format"),
        minimum: number_key(obj, "minimum"),
        maximum: number_key(obj, "maximum"),
        items: obj.get("items").map(|v| Box::new(normalize_property(v))),
        properties: obj
            .get("properties")
            .and_then(Value::as_object)
            .map(normalize_properties),
    }
}

fn number_key(obj: &Map<String, Value>, key: &str) -> Option<Number> {
    obj.get(key).and_then(Value::as_number).cloned()
}

fn string_key(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}
