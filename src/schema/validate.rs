//! Structural validation of a body against its schema.
//!
//! This is the per-level primitive the diagnostics collector invokes at
//! every node with the correct contextual schema. Nested blocks are the
//! caller's concern; only the directly declared content is inspected here.

use std::ops::Range;

use hcl_edit::expr::Expression;
use hcl_edit::structure::Body;
use hcl_edit::Span;

use super::{BodySchema, LiteralKind};

/// A schema level finding, located by byte span into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDiagnostic {
    pub span: Range<usize>,
    pub message: String,
}

/// Check the attributes and blocks declared directly in `body` against
/// `schema`.
///
/// Bodies whose schema accepts arbitrary attributes are validated
/// permissively: any attribute name passes, but unsupported nested blocks
/// are still reported.
pub fn validate_body(body: &Body, schema: &BodySchema) -> Vec<SchemaDiagnostic> {
    let mut diagnostics = Vec::new();

    for attribute in body.attributes() {
        if schema.any_attribute {
            continue;
        }
        let name = attribute.key.value().as_str();
        let name_span = attribute.key.span().unwrap_or_default();
        let Some(attribute_schema) = schema.attribute(name) else {
            diagnostics.push(SchemaDiagnostic {
                span: name_span,
                message: format!("Unsupported attribute: \"{name}\" is not expected here."),
            });
            continue;
        };
        if let Some(value_type) = attribute_schema.value_type {
            if !literal_matches(&attribute.value, value_type) {
                diagnostics.push(SchemaDiagnostic {
                    span: attribute.value.span().unwrap_or(name_span),
                    message: format!(
                        "Inappropriate value for attribute \"{name}\": {} required.",
                        value_type.friendly_name()
                    ),
                });
            }
        }
    }

    for block in body.blocks() {
        let kind = block.ident.value().as_str();
        if schema.block(kind).is_none() {
            diagnostics.push(SchemaDiagnostic {
                span: block.ident.span().unwrap_or_default(),
                message: format!(
                    "Unsupported block: blocks of type \"{kind}\" are not expected here."
                ),
            });
        }
    }

    for attribute_schema in schema.attributes.iter().filter(|a| a.required) {
        if body
            .attributes()
            .any(|a| a.key.value().as_str() == attribute_schema.name)
        {
            continue;
        }
        diagnostics.push(SchemaDiagnostic {
            span: body.span().unwrap_or_default(),
            message: format!(
                "Missing required attribute: \"{}\" is required but was not set.",
                attribute_schema.name
            ),
        });
    }

    diagnostics
}

/// Shallow literal check. Expressions that would need evaluation
/// (references, interpolations, function calls) always pass; full
/// expression type checking is out of scope.
fn literal_matches(expression: &Expression, value_type: LiteralKind) -> bool {
    match expression {
        Expression::String(_) => matches!(value_type, LiteralKind::String),
        Expression::Bool(_) => matches!(value_type, LiteralKind::Bool),
        Expression::Number(_) => matches!(value_type, LiteralKind::Number),
        Expression::Array(_) => matches!(value_type, LiteralKind::ListOfString),
        Expression::Object(_) => matches!(value_type, LiteralKind::MapOfString),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaMap;

    fn parse(source: &str) -> Body {
        hcl_edit::parser::parse_body(source).expect("fixture parses")
    }

    #[test]
    fn unknown_attribute_is_flagged_with_its_name_span() {
        let source = "attempts = 2\nattemptz = 3\n";
        let body = parse(source);
        let schemas = SchemaMap::new();
        let diagnostics = validate_body(&body, schemas.get("restart").unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("attemptz"));
        assert_eq!(
            &source[diagnostics[0].span.clone()],
            "attemptz",
            "diagnostic should point at the attribute name"
        );
    }

    #[test]
    fn permissive_body_accepts_any_attribute() {
        let body = parse("team = \"platform\"\nowner = \"alice\"\nwhatever = 7\n");
        let schemas = SchemaMap::new();
        let diagnostics = validate_body(&body, schemas.get("meta").unwrap());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn missing_required_attributes_are_reported_once_each() {
        let body = parse("type = \"http\"\n");
        let schemas = SchemaMap::new();
        let diagnostics = validate_body(&body, schemas.get("check").unwrap());
        let missing: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.message.starts_with("Missing required attribute"))
            .collect();
        assert_eq!(missing.len(), 2, "interval and timeout: {diagnostics:?}");
    }

    #[test]
    fn literal_type_mismatch_is_flagged() {
        let body = parse("attempts = \"two\"\n");
        let schemas = SchemaMap::new();
        let diagnostics = validate_body(&body, schemas.get("restart").unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("number required"));
    }

    #[test]
    fn non_literal_expressions_pass_the_type_check() {
        let body = parse("attempts = var.restart_attempts\n");
        let schemas = SchemaMap::new();
        let diagnostics = validate_body(&body, schemas.get("restart").unwrap());
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
    }

    #[test]
    fn unsupported_nested_block_is_flagged() {
        let body = parse("mode = \"host\"\nfirewall {\n}\n");
        let schemas = SchemaMap::new();
        let diagnostics = validate_body(&body, schemas.get("network").unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("firewall"));
    }
}
