//! End-to-end scenarios for the schema-driven resolver, driven by a
//! realistic job specification fixture.

use hcl_edit::structure::Body;
use pretty_assertions::assert_eq;

use nomad_ls::completion::completions;
use nomad_ls::diagnostics::{collect, to_lsp_diagnostic};
use nomad_ls::hover::hover;
use nomad_ls::position::{byte_offset, position_at};
use nomad_ls::resolver::{resolve_at, Resolution};
use nomad_ls::schema::SchemaMap;
use tower_lsp::lsp_types::Position;

fn fixture() -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/example.nomad.hcl");
    std::fs::read_to_string(path).expect("fixture should be readable")
}

fn parse(source: &str) -> Body {
    hcl_edit::parser::parse_body(source).expect("fixture should parse")
}

/// Byte offset just past the given needle's first occurrence.
fn after(source: &str, needle: &str) -> usize {
    source.find(needle).expect("needle present") + needle.len()
}

#[test]
fn fixture_parses_and_is_clean() {
    let source = fixture();
    let body = parse(&source);
    let schemas = SchemaMap::new();
    assert_eq!(collect(&body, &schemas), vec![]);
}

#[test]
fn containment_positions_resolve_into_the_enclosing_block() {
    let source = fixture();
    let body = parse(&source);
    let schemas = SchemaMap::new();

    for (needle, key) in [
        ("type        = \"service\"", "job"),
        ("count = 1", "group"),
        ("to = 3100", "port"),
        ("path     = \"/ready\"", "check"),
        ("image = \"grafana", "config:docker"),
        ("memory = 256", "resources"),
    ] {
        let offset = source.find(needle).unwrap();
        match resolve_at(&body, offset, &schemas, false) {
            Resolution::Terminal(matched) => {
                assert!(
                    std::ptr::eq(matched.schema, schemas.get(key).unwrap()),
                    "position in {needle:?} should resolve to schema {key:?}"
                );
            }
            _ => panic!("position in {needle:?} should resolve to a body"),
        }
    }
}

// Scenario: cursor in the service body with no check declared yet offers a
// `check` block candidate and none of the attributes already set.
#[test]
fn service_completion_offers_check_and_skips_declared_attributes() {
    let source = r#"
job "loki" {
  group "server" {
    service {
      name = "loki"
      port = "http"

    }
  }
}
"#;
    let body = parse(source);
    let schemas = SchemaMap::new();
    let offset = after(source, "port = \"http\"\n");
    let items = completions(&body, offset, &schemas);
    let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();

    assert!(labels.contains(&"check"), "{labels:?}");
    assert!(!labels.contains(&"name"), "{labels:?}");
    assert!(!labels.contains(&"port"), "{labels:?}");

    // Completing twice without edits yields the same candidate set.
    let again = completions(&body, offset, &schemas);
    let labels_again: Vec<_> = again.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, labels_again);
}

// Scenario: hovering the config block header of a docker task describes the
// docker driver configuration, not the generic config block.
#[test]
fn config_header_hover_describes_the_docker_schema() {
    let source = fixture();
    let body = parse(&source);
    let schemas = SchemaMap::new();

    let offset = source.find("config {").unwrap() + 2;
    let text = hover(&body, offset, &schemas).expect("hover content");
    assert!(text.contains("Docker"), "{text}");
    assert!(!text.contains("passed directly to the driver"), "{text}");
}

// Scenario: one line into a block body, in an unclaimed gap, hover falls
// through to attribute matching or nothing.
#[test]
fn hover_header_versus_body_boundary() {
    let source = fixture();
    let body = parse(&source);
    let schemas = SchemaMap::new();

    // On the `service` header itself.
    let header_offset = source.find("service {").unwrap() + 3;
    let text = hover(&body, header_offset, &schemas).expect("hover content");
    assert!(text.contains("service discovery"), "{text}");

    // One line into the service body, on the `name` attribute.
    let name_offset = source.find("name = \"loki\"").unwrap() + 1;
    let text = hover(&body, name_offset, &schemas).expect("hover content");
    assert!(text.contains("name of the service"), "{text}");

    // The blank line between `port` and the check block claims nothing.
    let gap_offset = after(&source, "port = \"http\"\n");
    assert_eq!(hover(&body, gap_offset, &schemas), None);
}

// Scenario: a check block missing its required `interval` produces exactly
// one missing-required diagnostic whose range spans the check block.
#[test]
fn missing_required_interval_is_reported_once() {
    let source = r#"
job "loki" {
  group "server" {
    service {
      name = "loki"

      check {
        type    = "http"
        path    = "/ready"
        timeout = "2s"
      }
    }
  }
}
"#;
    let body = parse(source);
    let schemas = SchemaMap::new();
    let diagnostics = collect(&body, &schemas);

    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    assert!(
        diagnostics[0].message.contains("\"interval\""),
        "{}",
        diagnostics[0].message
    );
    assert!(diagnostics[0].message.contains("Missing required attribute"));

    // The range stays within the check block's span.
    let check_start = source.find("check {").unwrap();
    let check_end = after(source, "timeout = \"2s\"\n      }");
    assert!(diagnostics[0].span.start >= check_start);
    assert!(diagnostics[0].span.end <= check_end);

    let wire = to_lsp_diagnostic(&diagnostics[0], source);
    assert!(wire.range.start.line >= position_at(source, check_start).line);
}

// Scenario: a meta block with arbitrary keys is a permissive body and
// produces no diagnostics, while a strict body flags a misspelling.
#[test]
fn meta_is_permissive_and_strict_bodies_flag_typos() {
    let source = fixture();
    let body = parse(&source);
    let schemas = SchemaMap::new();
    // Fixture meta carries three arbitrary keys; the whole document is clean.
    assert_eq!(collect(&body, &schemas), vec![]);

    let misspelled = source.replace("memory = 256", "memroy = 256");
    let body = parse(&misspelled);
    let diagnostics = collect(&body, &schemas);
    assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
    assert!(diagnostics[0].message.contains("\"memroy\""));
    assert_eq!(
        &misspelled[diagnostics[0].span.clone()],
        "memroy",
        "diagnostic should reference the attribute's name range"
    );
}

// The collector drops a dependent subtree when the driver value has no
// registered schema. Pinned here on purpose: flagging the driver value
// itself is the attribute-level machinery's job, not the collector's.
#[test]
fn unknown_driver_drops_the_config_subtree_silently() {
    let source = fixture().replace("\"docker\"", "\"podman\"");
    let body = parse(&source);
    let schemas = SchemaMap::new();
    assert_eq!(collect(&body, &schemas), vec![]);
}

#[test]
fn wire_positions_round_trip_through_byte_offsets() {
    let source = fixture();
    let mut offset = 0;
    for (line, text) in source.lines().enumerate() {
        // One probe per line: its last character boundary.
        let probe = offset + text.len();
        let position = position_at(&source, probe);
        assert_eq!(byte_offset(&source, position), probe, "line {line}");
        offset += text.len() + 1;
    }
    let final_position = Position {
        line: source.lines().count() as u32,
        character: 0,
    };
    assert_eq!(byte_offset(&source, final_position), source.len());
}

#[test]
fn dependent_resolution_matches_registered_composite_keys() {
    let source = fixture();
    let schemas = SchemaMap::new();

    for (driver, key) in [("exec", "config:exec"), ("java", "config:java")] {
        let replaced = source.replace("\"docker\"", &format!("\"{driver}\""));
        let body = parse(&replaced);
        let offset = replaced.find("image = \"grafana").unwrap();
        match resolve_at(&body, offset, &schemas, false) {
            Resolution::Terminal(matched) => {
                assert!(
                    std::ptr::eq(matched.schema, schemas.get(key).unwrap()),
                    "driver {driver:?} should select {key:?}"
                );
            }
            _ => panic!("expected terminal resolution for driver {driver:?}"),
        }
    }
}
