//! Filesystem-level tests for `generate`: directory creation, artifact
//! writing, and overwrite behavior.

use std::fs;

use tempfile::TempDir;
use valgen_codegen::generate;
use valgen_core::{normalize, parse_document, InputFormat};

fn sample_schema() -> valgen_core::Schema {
    let raw = parse_document(
        r#"{ "properties": { "name": { "type": "string" } }, "required": ["name"] }"#,
        InputFormat::Json,
    )
    .unwrap();
    normalize(&raw)
}

#[test]
fn test_generate_writes_four_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    let written = generate(&sample_schema(), &out).expect("generation should succeed");

    assert_eq!(written.len(), 4);
    for name in [
        "validator_ajv.js",
        "validator_zod.js",
        "validator_joi.js",
        "schema.json",
    ] {
        let path = out.join(name);
        assert!(path.exists(), "{name} not written");
        assert!(written.contains(&path));
    }

    let canonical: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("schema.json")).unwrap())
            .expect("schema.json should be valid JSON");
    assert_eq!(canonical["required"][0], "name");
}

#[test]
fn test_generate_creates_nested_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("deeply").join("nested").join("out");

    generate(&sample_schema(), &out).expect("generation should succeed");
    assert!(out.join("validator_zod.js").exists());
}

#[test]
fn test_generate_is_idempotent_over_existing_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    generate(&sample_schema(), &out).unwrap();
    let first = fs::read_to_string(out.join("validator_joi.js")).unwrap();

    // Second run over the same directory overwrites in place.
    generate(&sample_schema(), &out).unwrap();
    let second = fs::read_to_string(out.join("validator_joi.js")).unwrap();
    assert_eq!(first, second);
}
