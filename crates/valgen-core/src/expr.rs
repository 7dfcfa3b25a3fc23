//! Dialect-neutral validator expressions.
//!
//! Lowering a [`PropertySpec`] into a [`ValidatorExpr`] separates *which
//! constraints apply* to a field from *how a target dialect spells them*.
//! The renderers in the codegen crate consume this tree; tests can assert
//! tree equality before any text is produced.

use serde_json::{Number, Value};

use crate::schema::{PropertyKind, PropertySpec};

/// One field's constraints, independent of target syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorExpr {
    String {
        min_length: Option<Number>,
        max_length: Option<Number>,
        pattern: Option<String>,
        enum_values: Option<Vec<Value>>,
        email: bool,
    },
    Integer {
        minimum: Option<Number>,
        maximum: Option<Number>,
    },
    Number {
        minimum: Option<Number>,
        maximum: Option<Number>,
    },
    Boolean,
    Array(Box<ValidatorExpr>),
    /// Nested object shape, fields in insertion order. Nested fields carry no
    /// required/optional modifier: only top-level required-ness is applied.
    Object(Vec<(String, ValidatorExpr)>),
    /// Accept-anything sentinel for absent or unrecognized kinds.
    Any,
}

/// Lower one property spec into its constraint tree. Pure and total:
/// unrecognized kinds become [`ValidatorExpr::Any`], never an error.
pub fn lower(spec: &PropertySpec) -> ValidatorExpr {
    match spec.kind {
        Some(PropertyKind::String) => ValidatorExpr::String {
            min_length: spec.min_length.clone(),
            max_length: spec.max_length.clone(),
            pattern: spec.pattern.clone(),
            enum_values: spec.enum_values.clone(),
            email: spec.format.as_deref() == Some("email"),
        },
        Some(PropertyKind::Integer) => ValidatorExpr::Integer {
            minimum: spec.minimum.clone(),
            maximum: spec.maximum.clone(),
        },
        Some(PropertyKind::Number) => ValidatorExpr::Number {
            minimum: spec.minimum.clone(),
            maximum: spec.maximum.clone(),
        },
        Some(PropertyKind::Boolean) => ValidatorExpr::Boolean,
        Some(PropertyKind::Array) => {
            let items = spec
                .items
                .as_deref()
                .map(lower)
                .unwrap_or(ValidatorExpr::Any);
            ValidatorExpr::Array(Box::new(items))
        }
        Some(PropertyKind::Object) => {
            let fields = spec
                .properties
                .iter()
                .flatten()
                .map(|(name, child)| (name.clone(), lower(child)))
                .collect();
            ValidatorExpr::Object(fields)
        }
        Some(PropertyKind::Other(_)) | None => ValidatorExpr::Any,
    }
}
