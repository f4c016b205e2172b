//! Declarative schema graph for the Nomad job specification.
//!
//! The schema describes every block and attribute the job file format
//! understands: names, documentation, default values, literal type
//! constraints, and how blocks nest. All of it is static data, built into
//! a flattened registry once at server startup and shared read-only by
//! every request handler.
//!
//! A `task` block's `config` body has no fixed schema: the sibling `driver`
//! attribute selects one of several variants, registered under composite
//! keys such as `"config:docker"`.

use std::collections::HashMap;

mod drivers;
mod group;
mod job;
mod service;
mod shared;
mod task;
pub mod validate;

/// Literal type constraint attached to an attribute schema.
///
/// Used to shape completion snippets and to catch obvious literal
/// mismatches during validation; this is not a type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Number,
    Bool,
    ListOfString,
    MapOfString,
}

impl LiteralKind {
    /// Human readable name, shown as the completion item detail.
    pub fn friendly_name(self) -> &'static str {
        match self {
            LiteralKind::String => "string",
            LiteralKind::Number => "number",
            LiteralKind::Bool => "bool",
            LiteralKind::ListOfString => "list of string",
            LiteralKind::MapOfString => "map of string",
        }
    }
}

/// Default literal for an attribute, rendered into completion snippets.
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Str(&'static str),
    Num(i64),
    Bool(bool),
    List(&'static [&'static str]),
    Map(&'static [(&'static str, &'static str)]),
}

/// Schema for one attribute within a body.
#[derive(Debug)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub value_type: Option<LiteralKind>,
    pub default: Option<DefaultValue>,
}

/// Link from a block kind to the schema governing its body.
///
/// Exactly one of the two shapes applies to any block kind; a lookup that
/// misses the registry means "no schema, stop descending", never an error.
#[derive(Debug)]
pub enum SchemaLink {
    /// The body is always governed by the schema registered under this key.
    Simple(&'static str),
    /// The governing schema is selected by a sibling attribute's literal
    /// value; the registry is consulted under `"<kind>:<value>"`.
    Dependent { discriminator: &'static str },
}

/// Schema for a nested block kind within a body.
#[derive(Debug)]
pub struct BlockSchema {
    pub name: &'static str,
    pub description: &'static str,
    /// Whether instances carry a name label, e.g. `group "api" { … }`.
    pub labeled: bool,
    pub link: SchemaLink,
}

/// Schema for the contents of one block body (or the document top level).
#[derive(Debug)]
pub struct BodySchema {
    pub description: &'static str,
    pub attributes: &'static [AttributeSchema],
    pub blocks: &'static [BlockSchema],
    /// Permissive bodies accept arbitrary attribute names, e.g. `meta`.
    pub any_attribute: bool,
}

impl BodySchema {
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn block(&self, name: &str) -> Option<&'static BlockSchema> {
        self.blocks.iter().find(|b| b.name == name)
    }
}

/// Registry key of the document root schema.
pub const ROOT_SCHEMA: &str = "root";

/// Flattened registry of every known body schema, including the composite
/// `"<kind>:<value>"` keys that dependent blocks resolve through.
#[derive(Debug)]
pub struct SchemaMap {
    entries: HashMap<&'static str, &'static BodySchema>,
}

impl SchemaMap {
    /// Build the full registry. Called once at server startup; the result
    /// is passed by reference into every resolver call.
    pub fn new() -> Self {
        let entries = HashMap::from([
            (ROOT_SCHEMA, &job::ROOT),
            ("variable", &shared::VARIABLE),
            ("job", &job::JOB),
            ("update", &job::UPDATE),
            ("migrate", &job::MIGRATE),
            ("periodic", &job::PERIODIC),
            ("parameterized", &job::PARAMETERIZED),
            ("reschedule", &job::RESCHEDULE),
            ("group", &group::GROUP),
            ("restart", &group::RESTART),
            ("ephemeral_disk", &group::EPHEMERAL_DISK),
            ("network", &group::NETWORK),
            ("port", &group::PORT),
            ("dns", &group::DNS),
            ("volume", &group::VOLUME),
            ("volume_mount", &group::VOLUME_MOUNT),
            ("task", &task::TASK),
            ("resources", &task::RESOURCES),
            ("logs", &task::LOGS),
            ("template", &task::TEMPLATE),
            ("artifact", &task::ARTIFACT),
            ("env", &task::ENV),
            ("lifecycle", &task::LIFECYCLE),
            ("identity", &task::IDENTITY),
            ("service", &service::SERVICE),
            ("check", &service::CHECK),
            ("check_restart", &service::CHECK_RESTART),
            ("meta", &shared::META),
            ("constraint", &shared::CONSTRAINT),
            ("affinity", &shared::AFFINITY),
            ("spread", &shared::SPREAD),
            ("target", &shared::TARGET),
            ("vault", &shared::VAULT),
            ("config:docker", &drivers::DOCKER),
            ("config:exec", &drivers::EXEC),
            ("config:raw_exec", &drivers::RAW_EXEC),
            ("config:java", &drivers::JAVA),
            ("config:qemu", &drivers::QEMU),
        ]);
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&'static BodySchema> {
        self.entries.get(key).copied()
    }
}

impl Default for SchemaMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_simple_link_resolves_in_the_registry() {
        let schemas = SchemaMap::new();
        for (key, schema) in &schemas.entries {
            for block in schema.blocks {
                if let SchemaLink::Simple(target) = &block.link {
                    assert!(
                        schemas.get(target).is_some(),
                        "block {:?} in schema {:?} links to unregistered key {:?}",
                        block.name,
                        key,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn dependent_config_variants_are_registered() {
        let schemas = SchemaMap::new();
        for driver in ["docker", "exec", "raw_exec", "java", "qemu"] {
            let key = format!("config:{driver}");
            assert!(schemas.get(&key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn permissive_bodies_declare_no_attributes() {
        let schemas = SchemaMap::new();
        for key in ["meta", "env"] {
            let schema = schemas.get(key).unwrap();
            assert!(schema.any_attribute);
            assert!(schema.attributes.is_empty());
        }
    }
}
