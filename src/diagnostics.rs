//! Whole document validation and diagnostic mapping.
//!
//! The collector walks the entire tree (not position scoped), validating
//! each body against its contextual schema and aggregating the findings
//! from every level into one flat list. This module also owns the wire
//! boundary: byte spans become 0-based protocol ranges, and the parser's
//! 1-based error locations shift down by one.

use hcl_edit::structure::Body;
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};

use crate::position;
use crate::resolver;
use crate::schema::validate::{self, SchemaDiagnostic};
use crate::schema::{SchemaMap, ROOT_SCHEMA};

/// Validate the whole document tree against the schema graph.
pub fn collect(body: &Body, schemas: &SchemaMap) -> Vec<SchemaDiagnostic> {
    let mut diagnostics = Vec::new();
    walk(body, schemas, ROOT_SCHEMA, &mut diagnostics);
    diagnostics
}

fn walk(body: &Body, schemas: &SchemaMap, schema_key: &str, out: &mut Vec<SchemaDiagnostic>) {
    let Some(schema) = schemas.get(schema_key) else {
        return;
    };

    out.extend(validate::validate_body(body, schema));

    for block in body.blocks() {
        let kind = block.ident.value().as_str();
        let Some(block_schema) = schema.block(kind) else {
            // Already reported as unsupported; nothing to recurse into.
            continue;
        };
        // An unresolvable link (unknown driver, non-literal discriminator)
        // stops the walk for this subtree: findings from shallower levels
        // stand, deeper structure is simply not checked.
        let Some(key) = resolver::child_schema_key(block_schema, kind, body) else {
            continue;
        };
        walk(&block.body, schemas, &key, out);
    }
}

/// Map a schema finding onto the wire diagnostic type.
pub fn to_lsp_diagnostic(diagnostic: &SchemaDiagnostic, text: &str) -> Diagnostic {
    Diagnostic {
        range: Range {
            start: position::position_at(text, diagnostic.span.start),
            end: position::position_at(text, diagnostic.span.end),
        },
        severity: Some(DiagnosticSeverity::ERROR),
        source: Some("nomad-ls".to_string()),
        message: diagnostic.message.clone(),
        ..Default::default()
    }
}

/// Map an HCL parse failure onto the wire diagnostic type.
///
/// The parser reports 1-based line/column positions while the protocol is
/// 0-based, so both coordinates shift down by one here.
pub fn parse_error_to_diagnostic(error: &hcl_edit::parser::Error) -> Diagnostic {
    let location = error.location();
    let line = location.line().saturating_sub(1) as u32;
    let character = location.column().saturating_sub(1) as u32;
    Diagnostic {
        range: Range {
            start: Position { line, character },
            end: Position {
                line,
                character: character + 1,
            },
        },
        severity: Some(DiagnosticSeverity::ERROR),
        source: Some("nomad-ls".to_string()),
        message: error.message().to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Body {
        hcl_edit::parser::parse_body(source).expect("fixture parses")
    }

    #[test]
    fn findings_are_aggregated_across_levels() {
        let source = r#"
job "web" {
  colour = "blue"

  group "api" {
    coun = 1

    task "server" {
      driver = "docker"

      config {
        image = "nginx:1.25"
      }
    }
  }
}
"#;
        let body = parse(source);
        let schemas = SchemaMap::new();
        let diagnostics = collect(&body, &schemas);
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Unsupported attribute: \"colour\" is not expected here.",
                "Unsupported attribute: \"coun\" is not expected here.",
            ]
        );
    }

    #[test]
    fn dependent_config_is_validated_against_the_driver_schema() {
        let source = r#"
job "web" {
  group "api" {
    task "server" {
      driver = "docker"

      config {
        command = "server"
      }
    }
  }
}
"#;
        let body = parse(source);
        let schemas = SchemaMap::new();
        let diagnostics = collect(&body, &schemas);
        // `command` is valid docker config, but `image` is required.
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("\"image\""), "{diagnostics:?}");
    }

    #[test]
    fn unknown_driver_subtree_is_silently_skipped() {
        // The config body is full of nonsense, but with an unregistered
        // driver there is no schema to check it against. Only the
        // attribute-level machinery could flag the driver value itself;
        // the collector stays silent by design.
        let source = r#"
job "web" {
  group "api" {
    task "server" {
      driver = "podman"

      config {
        complete = "nonsense"
        gibberish = true
      }
    }
  }
}
"#;
        let body = parse(source);
        let schemas = SchemaMap::new();
        let diagnostics = collect(&body, &schemas);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
    }

    #[test]
    fn schema_diagnostic_maps_to_zero_based_wire_range() {
        let source = "job \"web\" {\n  colour = \"blue\"\n}\n";
        let body = parse(source);
        let schemas = SchemaMap::new();
        let diagnostics = collect(&body, &schemas);
        assert_eq!(diagnostics.len(), 1);

        let wire = to_lsp_diagnostic(&diagnostics[0], source);
        assert_eq!(wire.range.start, Position { line: 1, character: 2 });
        assert_eq!(wire.range.end, Position { line: 1, character: 8 });
        assert_eq!(wire.severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(wire.source.as_deref(), Some("nomad-ls"));
    }

    #[test]
    fn parse_error_shifts_one_based_location_to_zero_based() {
        let error = hcl_edit::parser::parse_body("job \"web\" {\n")
            .expect_err("unterminated block must fail");
        let wire = parse_error_to_diagnostic(&error);
        assert_eq!(wire.severity, Some(DiagnosticSeverity::ERROR));
        assert!(!wire.message.is_empty());
        // 1-based parser locations land on 0-based wire coordinates.
        assert!(wire.range.start.line < 2);
    }
}
