//! Error types for input loading.
//!
//! Parsing the input document is the only fallible operation in the core:
//! normalization and lowering are total by design, and a malformed schema
//! degrades to permissive output instead of erroring.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
