//! Input document parsing.
//!
//! The parse format is selected by file extension: `.yaml`/`.yml` parse as
//! YAML, anything else as JSON. Both formats land in an untyped
//! [`serde_json::Value`] with object key order preserved, which the
//! normalizer then copies into the canonical schema model.

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;

/// Supported input document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Pick the parse format from a file path's extension, case-insensitive.
    /// Unknown or missing extensions fall back to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

/// Parse an input document into an untyped value.
pub fn parse_document(text: &str, format: InputFormat) -> Result<Value, LoadError> {
    tracing::debug!(?format, bytes = text.len(), "parsing input document");
    match format {
        InputFormat::Yaml => Ok(serde_yaml::from_str(text)?),
        InputFormat::Json => Ok(serde_json::from_str(text)?),
    }
}
