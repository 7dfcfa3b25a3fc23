//! Zod emitter.
//!
//! Walks each top-level property into a chained constructor expression and
//! assembles the object shape. Fields outside the schema's required set get a
//! trailing `.optional()`; top-level field names render bare (nested object
//! keys are quoted by the shared walker).

use anyhow::Result;
use serde::Serialize;
use valgen_core::{lower, Schema};

use crate::render::{render, ZOD};
use crate::{generator_tag, render_template};

/// Template context for the Zod module.
#[derive(Serialize)]
struct ZodContext {
    generator: String,
    body: String,
}

/// Emit a complete ES module validating with Zod's `safeParse`.
/// `validateData(data)` returns `{ valid, error }`; the schema object is
/// exported alongside it.
pub fn emit(schema: &Schema) -> Result<String> {
    let mut lines = Vec::with_capacity(schema.properties.len());
    for (name, spec) in &schema.properties {
        let mut expr = render(&lower(spec), &ZOD);
        if !schema.is_required(name) {
            expr.push_str(".optional()");
        }
        lines.push(format!("  {name}: {expr},"));
    }

    render_template(
        "validator_zod.js.tera",
        &ZodContext {
            generator: generator_tag(),
            body: lines.join("\n"),
        },
    )
}
