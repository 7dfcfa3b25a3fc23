//! Rendering of validator expressions into dialect source syntax.
//!
//! One walker drives both tree-rendering dialects (Zod and Joi); everything a
//! dialect spells differently lives in its [`Syntax`] table, so the quirks
//! stay explicit and local instead of being duplicated across near-identical
//! control flow.
//!
//! Chain order for string constraints is fixed and identical across dialects:
//! min-length, max-length, pattern, enum handling, email suffix. Numeric
//! chains append min then max. A bound is emitted only when the constraint
//! tree carries it; absence is not zero.

use serde_json::Value;
use valgen_core::ValidatorExpr;

/// How a dialect encodes a string enum constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnumStyle {
    /// Replace the whole chain built so far with an enumeration constructor
    /// when every value is a string; drop the constraint otherwise (Zod).
    ReplaceWhenAllStrings { constructor: &'static str },
    /// Append a valid-values call with each value as a separate argument,
    /// regardless of element type (Joi).
    AppendValidArguments { method: &'static str },
}

/// Per-dialect spelling table consumed by [`render`].
pub(crate) struct Syntax {
    pub string_base: &'static str,
    pub integer_base: &'static str,
    pub number_base: &'static str,
    pub boolean: &'static str,
    /// Accept-anything sentinel for absent or unrecognized kinds.
    pub any: &'static str,
    pub pattern_method: &'static str,
    pub email_suffix: &'static str,
    pub enum_style: EnumStyle,
    /// Array constructor prefix; the rendered element expression and a closing
    /// parenthesis complete it.
    pub array_open: &'static str,
    /// Object-shape constructor prefix; the joined fields and `})` complete it.
    pub object_open: &'static str,
}

pub(crate) const ZOD: Syntax = Syntax {
    string_base: "z.string()",
    integer_base: "z.number().int()",
    number_base: "z.number()",
    boolean: "z.boolean()",
    any: "z.any()",
    pattern_method: ".regex",
    email_suffix: ".email()",
    enum_style: EnumStyle::ReplaceWhenAllStrings {
        constructor: "z.enum(",
    },
    array_open: "z.array(",
    object_open: "z.object({",
};

pub(crate) const JOI: Syntax = Syntax {
    string_base: "Joi.string()",
    integer_base: "Joi.number().integer()",
    number_base: "Joi.number()",
    boolean: "Joi.boolean()",
    any: "Joi.any()",
    pattern_method: ".pattern",
    email_suffix: ".email()",
    enum_style: EnumStyle::AppendValidArguments { method: ".valid(" },
    array_open: "Joi.array().items(",
    object_open: "Joi.object({",
};

/// Map one constraint tree to a dialect expression string. Pure and
/// deterministic; recursion mirrors the tree shape.
pub(crate) fn render(expr: &ValidatorExpr, syntax: &Syntax) -> String {
    match expr {
        ValidatorExpr::String {
            min_length,
            max_length,
            pattern,
            enum_values,
            email,
        } => {
            let mut out = syntax.string_base.to_string();
            if let Some(min) = min_length {
                out.push_str(&format!(".min({min})"));
            }
            if let Some(max) = max_length {
                out.push_str(&format!(".max({max})"));
            }
            if let Some(pattern) = pattern {
                // The pattern text rides inside a JS string literal and is not
                // escaped further; regex validity is the schema author's problem.
                out.push_str(&format!(
                    "{}(new RegExp({}))",
                    syntax.pattern_method,
                    js_literal(&Value::String(pattern.clone()))
                ));
            }
            if let Some(values) = enum_values {
                out = apply_enum(out, values, syntax.enum_style);
            }
            if *email {
                out.push_str(syntax.email_suffix);
            }
            out
        }
        ValidatorExpr::Integer { minimum, maximum } => {
            numeric_chain(syntax.integer_base, minimum.as_ref(), maximum.as_ref())
        }
        ValidatorExpr::Number { minimum, maximum } => {
            numeric_chain(syntax.number_base, minimum.as_ref(), maximum.as_ref())
        }
        ValidatorExpr::Boolean => syntax.boolean.to_string(),
        ValidatorExpr::Array(items) => {
            format!("{}{})", syntax.array_open, render(items, syntax))
        }
        ValidatorExpr::Object(fields) => {
            let inner = fields
                .iter()
                .map(|(name, child)| {
                    format!(
                        "{}: {}",
                        js_literal(&Value::String(name.clone())),
                        render(child, syntax)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}{}}})", syntax.object_open, inner)
        }
        ValidatorExpr::Any => syntax.any.to_string(),
    }
}

fn numeric_chain(
    base: &str,
    minimum: Option<&serde_json::Number>,
    maximum: Option<&serde_json::Number>,
) -> String {
    let mut out = base.to_string();
    if let Some(min) = minimum {
        out.push_str(&format!(".min({min})"));
    }
    if let Some(max) = maximum {
        out.push_str(&format!(".max({max})"));
    }
    out
}

fn apply_enum(chain: String, values: &[Value], style: EnumStyle) -> String {
    match style {
        EnumStyle::ReplaceWhenAllStrings { constructor } => {
            if values.iter().all(Value::is_string) {
                format!(
                    "{constructor}{})",
                    js_literal(&Value::Array(values.to_vec()))
                )
            } else {
                chain
            }
        }
        EnumStyle::AppendValidArguments { method } => {
            let args = values
                .iter()
                .map(js_literal)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{chain}{method}{args})")
        }
    }
}

/// JSON text doubles as a JavaScript literal for every value shape a schema
/// can carry (strings, numbers, booleans, null, arrays, objects).
pub(crate) fn js_literal(value: &Value) -> String {
    serde_json::to_string(value).expect("JSON value serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Number};

    use super::*;

    fn string_expr() -> ValidatorExpr {
        ValidatorExpr::String {
            min_length: None,
            max_length: None,
            pattern: None,
            enum_values: None,
            email: false,
        }
    }

    #[test]
    fn test_string_chain_order_is_fixed() {
        let expr = ValidatorExpr::String {
            min_length: Some(Number::from(3)),
            max_length: Some(Number::from(10)),
            pattern: Some("^[a-z]+$".to_string()),
            enum_values: None,
            email: true,
        };

        assert_eq!(
            render(&expr, &ZOD),
            r#"z.string().min(3).max(10).regex(new RegExp("^[a-z]+$")).email()"#
        );
        assert_eq!(
            render(&expr, &JOI),
            r#"Joi.string().min(3).max(10).pattern(new RegExp("^[a-z]+$")).email()"#
        );
    }

    #[test]
    fn test_absent_bounds_are_omitted() {
        assert_eq!(render(&string_expr(), &ZOD), "z.string()");

        let only_min = ValidatorExpr::Integer {
            minimum: Some(Number::from(0)),
            maximum: None,
        };
        assert_eq!(render(&only_min, &ZOD), "z.number().int().min(0)");
        assert_eq!(render(&only_min, &JOI), "Joi.number().integer().min(0)");
    }

    #[test]
    fn test_zod_all_string_enum_replaces_chain() {
        let expr = ValidatorExpr::String {
            min_length: Some(Number::from(1)),
            max_length: None,
            pattern: None,
            enum_values: Some(vec![json!("a"), json!("b"), json!("c")]),
            email: false,
        };
        // The min-length call built earlier is discarded wholesale.
        assert_eq!(render(&expr, &ZOD), r#"z.enum(["a","b","c"])"#);
    }

    #[test]
    fn test_zod_mixed_enum_is_dropped() {
        let expr = ValidatorExpr::String {
            min_length: Some(Number::from(1)),
            max_length: None,
            pattern: None,
            enum_values: Some(vec![json!("a"), json!(3)]),
            email: false,
        };
        assert_eq!(render(&expr, &ZOD), "z.string().min(1)");
    }

    #[test]
    fn test_joi_enum_keeps_chain_and_mixed_values() {
        let expr = ValidatorExpr::String {
            min_length: Some(Number::from(1)),
            max_length: None,
            pattern: None,
            enum_values: Some(vec![json!("a"), json!(3)]),
            email: false,
        };
        assert_eq!(
            render(&expr, &JOI),
            r#"Joi.string().min(1).valid("a", 3)"#
        );
    }

    #[test]
    fn test_zod_enum_then_email_suffix() {
        let expr = ValidatorExpr::String {
            min_length: None,
            max_length: None,
            pattern: None,
            enum_values: Some(vec![json!("a@x.io")]),
            email: true,
        };
        // Email appends after the enum replacement, same as the chain order.
        assert_eq!(render(&expr, &ZOD), r#"z.enum(["a@x.io"]).email()"#);
    }

    #[test]
    fn test_pattern_literal_is_json_escaped() {
        let expr = ValidatorExpr::String {
            min_length: None,
            max_length: None,
            pattern: Some(r#"^\d+"quoted"$"#.to_string()),
            enum_values: None,
            email: false,
        };
        assert_eq!(
            render(&expr, &ZOD),
            r#"z.string().regex(new RegExp("^\\d+\"quoted\"$"))"#
        );
    }

    #[test]
    fn test_array_and_object_composition() {
        let expr = ValidatorExpr::Array(Box::new(ValidatorExpr::Object(vec![
            ("name".to_string(), string_expr()),
            ("ok".to_string(), ValidatorExpr::Boolean),
        ])));

        assert_eq!(
            render(&expr, &ZOD),
            r#"z.array(z.object({"name": z.string(), "ok": z.boolean()}))"#
        );
        assert_eq!(
            render(&expr, &JOI),
            r#"Joi.array().items(Joi.object({"name": Joi.string(), "ok": Joi.boolean()}))"#
        );
    }

    #[test]
    fn test_empty_object_shape() {
        assert_eq!(render(&ValidatorExpr::Object(vec![]), &ZOD), "z.object({})");
        assert_eq!(
            render(&ValidatorExpr::Object(vec![]), &JOI),
            "Joi.object({})"
        );
    }

    #[test]
    fn test_any_sentinel() {
        assert_eq!(render(&ValidatorExpr::Any, &ZOD), "z.any()");
        assert_eq!(render(&ValidatorExpr::Any, &JOI), "Joi.any()");
    }
}
