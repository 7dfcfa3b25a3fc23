//! Canonical schema representation.
//!
//! A [`Schema`] is the read-only contract the emitters consume: an ordered
//! property map plus the set of required top-level field names. Property
//! iteration order is insertion order and drives the field order of every
//! generated object literal, so the same input always produces byte-identical
//! output.
//!
//! Serializing a [`Schema`] yields the canonical JSON-Schema-shaped document
//! written to `schema.json` and embedded in the Ajv module. Only the keys the
//! generator interprets survive canonicalization; unrecognized `type` tags are
//! carried through verbatim via [`PropertyKind::Other`].

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Type tag of one schema field.
///
/// Unrecognized tags are preserved as [`PropertyKind::Other`] so the canonical
/// JSON round-trips; downstream they map to the accept-anything sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Other(String),
}

impl PropertyKind {
    /// Parse a raw `type` tag. Never fails: anything unrecognized becomes
    /// [`PropertyKind::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => PropertyKind::String,
            "integer" => PropertyKind::Integer,
            "number" => PropertyKind::Number,
            "boolean" => PropertyKind::Boolean,
            "array" => PropertyKind::Array,
            "object" => PropertyKind::Object,
            other => PropertyKind::Other(other.to_string()),
        }
    }

    /// The tag as it appears in the canonical JSON form.
    pub fn as_tag(&self) -> &str {
        match self {
            PropertyKind::String => "string",
            PropertyKind::Integer => "integer",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Array => "array",
            PropertyKind::Object => "object",
            PropertyKind::Other(tag) => tag,
        }
    }
}

impl Serialize for PropertyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

/// One field's constraint set.
///
/// Every attribute is optional; absence means the constraint does not apply
/// (absence ≠ zero). Constraints that make no sense for the field's kind are
/// carried through canonicalization but ignored by the emitters, matching the
/// permissive no-validation contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertySpec {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyKind>,

    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Number>,

    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Number>,

    /// Raw pattern text, embedded as-is in generated regex literals.
    /// Never checked for regex validity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Ordered enum values. Only honored on string-kind fields.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    /// Only `"email"` is recognized downstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,

    /// Array element spec. Absent means elements accept anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySpec>>,

    /// Nested object properties, in insertion order. Nested required-ness is
    /// not tracked: only top-level fields carry a required/optional modifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, PropertySpec>>,
}

/// Canonical representation of one validation contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    /// Field name → spec, insertion order preserved.
    pub properties: IndexMap<String, PropertySpec>,

    /// Top-level required field names, input order preserved.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    /// Whether a top-level field carries the required modifier.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Pretty-printed canonical JSON form, 2-space indent, non-ASCII
    /// characters preserved literally. No trailing newline.
    pub fn to_canonical_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .expect("canonical schema serialization cannot fail: all keys are strings")
    }
}
