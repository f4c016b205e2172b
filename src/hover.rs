//! Hover descriptions for blocks and attributes.

use hcl_edit::structure::Body;
use hcl_edit::Span;

use crate::resolver::{self, contains, Resolution};
use crate::schema::SchemaMap;

/// Description of whatever sits under the cursor, if the schema knows it.
///
/// A position on a block's header line yields the block's documentation
/// (resolved through the driver for a dependent `config` block). Inside a
/// body, the attribute whose name range encloses the position wins; an
/// unclaimed gap yields nothing.
pub fn hover(body: &Body, offset: usize, schemas: &SchemaMap) -> Option<String> {
    match resolver::resolve_at(body, offset, schemas, true) {
        Resolution::Header { description } => Some(description.to_string()),
        Resolution::Terminal(matched) => {
            for attribute in matched.body.attributes() {
                let Some(span) = attribute.key.span() else {
                    continue;
                };
                if contains(&span, offset) {
                    return matched
                        .schema
                        .attribute(attribute.key.value().as_str())
                        .map(|schema| schema.description.to_string());
                }
            }
            None
        }
        Resolution::NoSchema => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = r#"
job "web" {
  group "api" {

    service {
      name = "api"
    }

    task "server" {
      driver = "docker"

      config {
        image = "nginx:1.25"
      }
    }
  }
}
"#;

    fn parse(source: &str) -> Body {
        hcl_edit::parser::parse_body(source).expect("fixture parses")
    }

    #[test]
    fn block_header_yields_the_block_description() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        let offset = JOB.find("service {").unwrap() + 2;
        let text = hover(&body, offset, &schemas).expect("hover content");
        assert!(text.contains("service discovery"), "{text}");
    }

    #[test]
    fn dependent_config_header_describes_the_selected_driver() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        let offset = JOB.find("config {").unwrap() + 2;
        let text = hover(&body, offset, &schemas).expect("hover content");
        assert!(text.contains("Docker"), "{text}");
    }

    #[test]
    fn unknown_driver_falls_back_to_the_generic_config_description() {
        let source = JOB.replace("\"docker\"", "\"podman\"");
        let body = parse(&source);
        let schemas = SchemaMap::new();
        let offset = source.find("config {").unwrap() + 2;
        let text = hover(&body, offset, &schemas).expect("hover content");
        assert!(text.contains("driver configuration"), "{text}");
    }

    #[test]
    fn attribute_name_yields_the_attribute_description() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        let offset = JOB.find("driver =").unwrap() + 2;
        let text = hover(&body, offset, &schemas).expect("hover content");
        assert!(text.contains("task driver"), "{text}");
    }

    #[test]
    fn unclaimed_gap_inside_a_body_yields_nothing() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        // The blank line at the top of the group body.
        let offset = JOB.find("group \"api\" {").unwrap() + "group \"api\" {\n".len();
        assert_eq!(hover(&body, offset, &schemas), None);
    }

    #[test]
    fn unknown_attribute_yields_nothing() {
        let source = JOB.replace("name = \"api\"", "nmae = \"api\"");
        let body = parse(&source);
        let schemas = SchemaMap::new();
        let offset = source.find("nmae").unwrap() + 1;
        assert_eq!(hover(&body, offset, &schemas), None);
    }
}
