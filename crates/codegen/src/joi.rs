//! Joi emitter.
//!
//! Walks each top-level property into a chained constructor expression and
//! assembles the object shape. Every field carries an explicit `.required()`
//! or `.optional()` modifier, and field names are JSON-quoted.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use valgen_core::{lower, Schema};

use crate::render::{js_literal, render, JOI};
use crate::{generator_tag, render_template};

/// Template context for the Joi module.
#[derive(Serialize)]
struct JoiContext {
    generator: String,
    body: String,
}

/// Emit a complete CommonJS module validating with Joi. The validation call
/// collects all errors (`abortEarly: false`) and `validateData(data)` returns
/// `{ valid, error, value }`.
pub fn emit(schema: &Schema) -> Result<String> {
    let mut lines = Vec::with_capacity(schema.properties.len());
    for (name, spec) in &schema.properties {
        let mut expr = render(&lower(spec), &JOI);
        if schema.is_required(name) {
            expr.push_str(".required()");
        } else {
            expr.push_str(".optional()");
        }
        lines.push(format!(
            "  {}: {},",
            js_literal(&Value::String(name.clone())),
            expr
        ));
    }

    render_template(
        "validator_joi.js.tera",
        &JoiContext {
            generator: generator_tag(),
            body: lines.join("\n"),
        },
    )
}
