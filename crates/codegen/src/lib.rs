//! Validator module emitters for valgen.
//!
//! Takes the canonical [`Schema`] from `valgen-core` and produces four
//! artifacts: one validator module per [`Dialect`] (Ajv, Zod, Joi) plus the
//! canonical schema as pretty-printed JSON. Module scaffolding lives in
//! embedded tera templates; the per-property expression syntax comes from the
//! shared walker in [`render`].
//!
//! Emission is deterministic: identical schemas produce byte-identical
//! artifacts, and generated headers carry the tool version but never a
//! timestamp.

pub mod ajv;
pub mod joi;
pub mod zod;

mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tera::Tera;
use valgen_core::Schema;

#[derive(Embed)]
#[folder = "templates/"]
struct Templates;

/// Target validator library for one generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    Ajv,
    Zod,
    Joi,
}

impl Dialect {
    /// Emission order for a full run.
    pub const ALL: [Dialect; 3] = [Dialect::Ajv, Dialect::Zod, Dialect::Joi];

    /// Output filename for this dialect's module.
    pub fn filename(self) -> &'static str {
        match self {
            Dialect::Ajv => "validator_ajv.js",
            Dialect::Zod => "validator_zod.js",
            Dialect::Joi => "validator_joi.js",
        }
    }

    /// Emit this dialect's complete, self-contained validator module.
    pub fn emit(self, schema: &Schema) -> Result<String> {
        match self {
            Dialect::Ajv => ajv::emit(schema),
            Dialect::Zod => zod::emit(schema),
            Dialect::Joi => joi::emit(schema),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Ajv => write!(f, "ajv"),
            Dialect::Zod => write!(f, "zod"),
            Dialect::Joi => write!(f, "joi"),
        }
    }
}

/// One generated output file: name plus full source text.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub filename: &'static str,
    pub source: String,
}

/// Render every artifact in memory: the three validator modules plus the
/// canonical schema as pretty-printed JSON (UTF-8, non-ASCII preserved
/// literally).
pub fn emit_all(schema: &Schema) -> Result<Vec<GeneratedArtifact>> {
    let mut artifacts = Vec::with_capacity(Dialect::ALL.len() + 1);
    for dialect in Dialect::ALL {
        artifacts.push(GeneratedArtifact {
            filename: dialect.filename(),
            source: dialect.emit(schema)?,
        });
    }
    artifacts.push(GeneratedArtifact {
        filename: "schema.json",
        source: format!("{}\n", schema.to_canonical_json()),
    });
    Ok(artifacts)
}

/// Emit every artifact beneath `output_dir`, creating the directory if
/// missing. Files are written independently; a failure leaves earlier files
/// in place. Returns the written paths in emission order.
pub fn generate(schema: &Schema, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let artifacts = emit_all(schema)?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output dir: {}", output_dir.display())
    })?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = output_dir.join(artifact.filename);
        fs::write(&path, &artifact.source)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// Provenance string for generated-file headers. Tool version only, no
/// timestamp: artifacts must be byte-identical across runs.
pub(crate) fn generator_tag() -> String {
    format!("valgen v{}", env!("CARGO_PKG_VERSION"))
}

/// Build a Tera engine from the embedded templates.
fn template_engine() -> Result<Tera> {
    let mut tera = Tera::default();
    for file_name in Templates::iter() {
        let file = Templates::get(&file_name)
            .with_context(|| format!("Failed to load embedded template: {}", file_name))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .with_context(|| format!("Template {} is not valid UTF-8", file_name))?;
        tera.add_raw_template(&file_name, content)
            .with_context(|| format!("Failed to register template: {}", file_name))?;
    }
    Ok(tera)
}

/// Render one embedded template with the given context.
pub(crate) fn render_template<T: Serialize>(template_name: &str, context: &T) -> Result<String> {
    let tera = template_engine()?;
    let ctx =
        tera::Context::from_serialize(context).with_context(|| "Failed to serialize context")?;
    tera.render(template_name, &ctx)
        .with_context(|| format!("Failed to render template: {}", template_name))
}
