//! Core translation pipeline for valgen.
//!
//! Translates a simplified schema document (YAML or JSON, structurally a
//! subset of JSON Schema) into a canonical in-memory model that the codegen
//! crate renders as validator modules for Ajv, Zod, and Joi.
//!
//! The pipeline is a single linear pass:
//!
//! 1. [`parse_document`] reads YAML or JSON into an untyped value
//! 2. [`normalize`] copies it into the canonical [`Schema`]
//! 3. [`lower`] turns each property into a dialect-neutral [`ValidatorExpr`]
//!
//! Everything past parsing is pure, total, and deterministic: the same input
//! always produces the same tree, and the codegen crate renders byte-identical
//! text from it. Malformed schemas degrade to permissive output (unknown type
//! tags become accept-anything sentinels) rather than erroring.
//!
//! ## Example
//!
//! ```rust
//! use valgen_core::{normalize, parse_document, InputFormat};
//!
//! let raw = parse_document(
//!     r#"{"properties": {"age": {"type": "integer", "minimum": 0}}, "required": ["age"]}"#,
//!     InputFormat::Json,
//! )
//! .unwrap();
//! let schema = normalize(&raw);
//! assert!(schema.is_required("age"));
//! ```

pub mod error;
pub mod expr;
pub mod input;
pub mod normalize;
pub mod schema;

pub use error::LoadError;
pub use expr::{lower, ValidatorExpr};
pub use input::{parse_document, InputFormat};
pub use normalize::normalize;
pub use schema::{PropertyKind, PropertySpec, Schema};
