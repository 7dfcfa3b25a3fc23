//! Ajv emitter.
//!
//! Ajv consumes JSON Schema natively, so this dialect skips the expression
//! walk entirely and embeds the canonical schema text verbatim in the module.

use anyhow::Result;
use serde::Serialize;
use valgen_core::Schema;

use crate::{generator_tag, render_template};

/// Template context for the Ajv module.
#[derive(Serialize)]
struct AjvContext {
    generator: String,
    schema_json: String,
}

/// Emit a complete CommonJS module compiling the schema with Ajv.
/// `validateData(data)` returns `{ valid, errors }`.
pub fn emit(schema: &Schema) -> Result<String> {
    render_template(
        "validator_ajv.js.tera",
        &AjvContext {
            generator: generator_tag(),
            schema_json: schema.to_canonical_json(),
        },
    )
}
