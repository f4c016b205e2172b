//! Completion candidates for the body enclosing the cursor.

use hcl_edit::structure::Body;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, InsertTextFormat, MarkupContent, MarkupKind,
};

use crate::resolver::{self, Resolution};
use crate::schema::{AttributeSchema, DefaultValue, LiteralKind, SchemaMap};

/// Produce completion candidates at `offset`.
///
/// Candidates are only offered for the innermost body enclosing the cursor:
/// skeleton snippets for every nested block kind the schema knows there,
/// and assignment snippets for attributes not yet set. A position the
/// schema cannot describe yields an empty list, never an error.
pub fn completions(body: &Body, offset: usize, schemas: &SchemaMap) -> Vec<CompletionItem> {
    let Resolution::Terminal(matched) = resolver::resolve_at(body, offset, schemas, false) else {
        return Vec::new();
    };

    let mut items = Vec::new();

    for block in matched.schema.blocks {
        items.push(CompletionItem {
            label: block.name.to_string(),
            kind: Some(CompletionItemKind::CLASS),
            detail: Some("block".to_string()),
            documentation: Some(markdown(block.description)),
            insert_text: Some(block_snippet(block.name, block.labeled, matched.depth)),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            ..Default::default()
        });
    }

    for attribute in matched.schema.attributes {
        if declared(matched.body, attribute.name) {
            continue;
        }
        // Nothing useful to insert without a literal type constraint.
        let Some(value_type) = attribute.value_type else {
            continue;
        };
        items.push(CompletionItem {
            label: attribute.name.to_string(),
            kind: Some(CompletionItemKind::FIELD),
            detail: Some(value_type.friendly_name().to_string()),
            documentation: Some(markdown(attribute.description)),
            insert_text: Some(attribute_snippet(attribute, value_type)),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            ..Default::default()
        });
    }

    items.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| kind_rank(a).cmp(&kind_rank(b))));
    items.dedup_by(|a, b| a.label == b.label);
    items
}

fn kind_rank(item: &CompletionItem) -> u8 {
    match item.kind {
        Some(CompletionItemKind::CLASS) => 0,
        _ => 1,
    }
}

fn declared(body: &Body, name: &str) -> bool {
    body.get_attribute(name).is_some()
}

fn markdown(value: &str) -> Documentation {
    Documentation::MarkupContent(MarkupContent {
        kind: MarkupKind::Markdown,
        value: value.to_string(),
    })
}

/// Skeleton snippet for a nested block, indented one tab per nesting level.
fn block_snippet(name: &str, labeled: bool, depth: usize) -> String {
    let indent = "\t".repeat(depth);
    if labeled {
        format!("{name} \"${{1:name}}\" {{\n{indent}$0\n}}")
    } else {
        format!("{name} {{\n{indent}$0\n}}")
    }
}

/// Assignment snippet shaped by the attribute's literal type, with the
/// schema default pre-selected when one is known.
fn attribute_snippet(attribute: &AttributeSchema, value_type: LiteralKind) -> String {
    let name = attribute.name;
    if let Some(default) = &attribute.default {
        if let Some(snippet) = default_snippet(name, value_type, default) {
            return snippet;
        }
    }
    match value_type {
        LiteralKind::String => format!("{name} = \"$0\""),
        LiteralKind::Bool => format!("{name} = $0"),
        LiteralKind::ListOfString => format!("{name} = [$0]"),
        LiteralKind::MapOfString => format!("{name} = {{$0}}"),
        LiteralKind::Number => format!("{name} = "),
    }
}

/// A default that does not fit the declared type is skipped rather than
/// rendered wrong.
fn default_snippet(name: &str, value_type: LiteralKind, default: &DefaultValue) -> Option<String> {
    match (value_type, default) {
        (LiteralKind::String, DefaultValue::Str(value)) => {
            Some(format!("{name} = \"${{0:{value}}}\""))
        }
        (LiteralKind::Number, DefaultValue::Num(value)) => Some(format!("{name} = ${{0:{value}}}")),
        (LiteralKind::Bool, DefaultValue::Bool(value)) => Some(format!("{name} = ${{0:{value}}}")),
        (LiteralKind::ListOfString, DefaultValue::List(values)) => {
            let joined = values
                .iter()
                .map(|value| format!("\"{value}\""))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("{name} = [${{0:{joined}}}]"))
        }
        (LiteralKind::MapOfString, DefaultValue::Map(pairs)) => {
            let joined = pairs
                .iter()
                .map(|(key, value)| format!("\"{key}\" = \"{value}\""))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("{name} = {{${{0:{joined}}}}}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaMap;

    const JOB: &str = r#"
job "web" {
  type = "service"

  group "api" {
    count = 2

    service {
      name = "api"
      port = "http"

    }
  }
}
"#;

    fn parse(source: &str) -> Body {
        hcl_edit::parser::parse_body(source).expect("fixture parses")
    }

    fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn service_body_offers_check_block_and_unset_attributes() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        let offset = JOB.find("port = \"http\"").unwrap() + "port = \"http\"\n".len();
        let items = completions(&body, offset, &schemas);
        let labels = labels(&items);

        assert!(labels.contains(&"check"), "{labels:?}");
        assert!(labels.contains(&"provider"), "{labels:?}");
        assert!(!labels.contains(&"name"), "already declared: {labels:?}");
        assert!(!labels.contains(&"port"), "already declared: {labels:?}");
    }

    #[test]
    fn completion_is_idempotent_and_free_of_duplicates() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        let offset = JOB.find("count = 2").unwrap();
        let first = completions(&body, offset, &schemas);
        let second = completions(&body, offset, &schemas);
        assert_eq!(labels(&first), labels(&second));

        let mut seen = std::collections::HashSet::new();
        for item in &first {
            assert!(seen.insert(item.label.clone()), "duplicate {}", item.label);
        }
    }

    #[test]
    fn labeled_blocks_get_a_label_placeholder() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        let offset = JOB.find("count = 2").unwrap();
        let items = completions(&body, offset, &schemas);

        let task = items.iter().find(|i| i.label == "task").unwrap();
        assert_eq!(
            task.insert_text.as_deref(),
            Some("task \"${1:name}\" {\n\t\t\t$0\n}")
        );
        let restart = items.iter().find(|i| i.label == "restart").unwrap();
        assert_eq!(restart.insert_text.as_deref(), Some("restart {\n\t\t\t$0\n}"));
    }

    #[test]
    fn defaults_are_prefilled_per_type() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        // Top of the job body, where most attributes are still unset.
        let offset = JOB.find("type = \"service\"").unwrap() + "type = \"service\"\n".len();
        let items = completions(&body, offset, &schemas);

        let by_label = |label: &str| {
            items
                .iter()
                .find(|i| i.label == label)
                .unwrap_or_else(|| panic!("missing {label}"))
                .insert_text
                .as_deref()
                .unwrap()
        };
        assert_eq!(by_label("region"), "region = \"${0:global}\"");
        assert_eq!(by_label("priority"), "priority = ${0:50}");
        assert_eq!(by_label("all_at_once"), "all_at_once = ${0:false}");
        assert_eq!(by_label("datacenters"), "datacenters = [${0:\"*\"}]");
        // No default on `name`: plain quoted placeholder.
        assert_eq!(by_label("name"), "name = \"$0\"");
    }

    #[test]
    fn declared_attribute_is_excluded_at_the_terminal_level_only() {
        let body = parse(JOB);
        let schemas = SchemaMap::new();
        let offset = JOB.find("type = \"service\"").unwrap() + "type = \"service\"\n".len();
        let items = completions(&body, offset, &schemas);
        assert!(!labels(&items).contains(&"type"));
    }

    #[test]
    fn unknown_driver_config_produces_no_candidates() {
        let source = r#"
job "web" {
  group "api" {
    task "server" {
      driver = "podman"

      config {
        image = "nginx:1.25"
      }
    }
  }
}
"#;
        let body = parse(source);
        let schemas = SchemaMap::new();
        let offset = source.find("image =").unwrap();
        assert!(completions(&body, offset, &schemas).is_empty());
    }
}
