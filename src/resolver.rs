//! Position based descent through a parsed job document.
//!
//! The walker mirrors the document's nesting: at each level it matches the
//! declared blocks against the schema, descends into the one whose body
//! encloses the requested byte offset, and stops at the innermost body it
//! can still describe. Dependent blocks (a task's `config`) resolve their
//! schema through the sibling discriminator attribute before descending.

use std::ops::Range;

use hcl_edit::expr::Expression;
use hcl_edit::structure::{Block, BlockLabel, Body};
use hcl_edit::Span;

use crate::schema::{BlockSchema, BodySchema, SchemaLink, SchemaMap, ROOT_SCHEMA};

/// Innermost body enclosing the requested position, the schema governing
/// it, and how deep in the block tree it sits (the document root is
/// depth 1).
pub struct BodyMatch<'a> {
    pub schema: &'static BodySchema,
    pub body: &'a Body,
    pub depth: usize,
}

/// Outcome of a position resolution.
pub enum Resolution<'a> {
    /// The position sits directly in this body, outside any nested block.
    Terminal(BodyMatch<'a>),
    /// The position sits on a block's header (type and labels). Only
    /// produced when header matching was requested.
    Header { description: &'static str },
    /// The nesting path leads somewhere the schema does not describe: an
    /// unregistered key, or a dependent block whose discriminator is
    /// missing or not a literal. Not an error; the document may be
    /// mid-edit or use an unimplemented driver.
    NoSchema,
}

/// Byte containment test, inclusive on both ends.
pub(crate) fn contains(span: &Range<usize>, offset: usize) -> bool {
    span.start <= offset && offset <= span.end
}

/// Walk the document tree towards `offset`, starting at the root schema.
///
/// With `match_headers` set, a position on a block's header short circuits
/// the walk; hover wants this, completion does not.
pub fn resolve_at<'a>(
    body: &'a Body,
    offset: usize,
    schemas: &SchemaMap,
    match_headers: bool,
) -> Resolution<'a> {
    descend(body, offset, schemas, ROOT_SCHEMA, 1, match_headers)
}

fn descend<'a>(
    body: &'a Body,
    offset: usize,
    schemas: &SchemaMap,
    schema_key: &str,
    depth: usize,
    match_headers: bool,
) -> Resolution<'a> {
    let Some(schema) = schemas.get(schema_key) else {
        return Resolution::NoSchema;
    };

    // Find the declared block whose body encloses the position. Malformed
    // sources can yield overlapping ranges; the smallest enclosing body
    // wins the tie.
    let mut matched: Option<(&Block, &'static BlockSchema, Range<usize>)> = None;
    for block in body.blocks() {
        let kind = block.ident.value().as_str();
        let Some(block_schema) = schema.block(kind) else {
            continue;
        };
        let Some(span) = block.body.span() else {
            continue;
        };
        if !contains(&span, offset) {
            if match_headers {
                if let Some(header) = header_span(block) {
                    if contains(&header, offset) {
                        return Resolution::Header {
                            description: header_description(block_schema, kind, body, schemas),
                        };
                    }
                }
            }
            continue;
        }
        let smaller = match &matched {
            Some((_, _, best)) => span.end - span.start < best.end - best.start,
            None => true,
        };
        if smaller {
            matched = Some((block, block_schema, span));
        }
    }

    let Some((block, block_schema, _)) = matched else {
        return Resolution::Terminal(BodyMatch { schema, body, depth });
    };

    match child_schema_key(block_schema, block.ident.value().as_str(), body) {
        Some(key) => descend(&block.body, offset, schemas, &key, depth + 1, match_headers),
        None => Resolution::NoSchema,
    }
}

/// Registry key for the schema governing a block's body, resolving
/// dependent links through the sibling discriminator attribute.
pub(crate) fn child_schema_key(
    block_schema: &BlockSchema,
    kind: &str,
    parent: &Body,
) -> Option<String> {
    match &block_schema.link {
        SchemaLink::Simple(key) => Some((*key).to_string()),
        SchemaLink::Dependent { discriminator } => {
            let value = literal_string(parent, discriminator)?;
            Some(format!("{kind}:{value}"))
        }
    }
}

/// Read an attribute's value as a plain literal string. Anything else
/// (interpolations, references, other literal kinds) yields `None`; the
/// resolver never evaluates expressions.
pub(crate) fn literal_string(body: &Body, name: &str) -> Option<String> {
    let attribute = body.get_attribute(name)?;
    match &attribute.value {
        Expression::String(value) => Some(value.value().clone()),
        _ => None,
    }
}

/// Source span of a block's header: the type identifier plus any labels.
fn header_span(block: &Block) -> Option<Range<usize>> {
    let ident = block.ident.span()?;
    let mut end = ident.end;
    for label in &block.labels {
        let span = match label {
            BlockLabel::Ident(ident) => ident.span(),
            BlockLabel::String(string) => string.span(),
        };
        if let Some(span) = span {
            end = end.max(span.end);
        }
    }
    Some(ident.start..end)
}

/// Description for a hovered block header. Dependent blocks resolve through
/// the discriminator, so a docker task's `config` header describes the
/// docker configuration rather than the generic block; when the
/// discriminator does not resolve, the generic description is used.
fn header_description(
    block_schema: &'static BlockSchema,
    kind: &str,
    parent: &Body,
    schemas: &SchemaMap,
) -> &'static str {
    if let SchemaLink::Dependent { .. } = block_schema.link {
        if let Some(schema) =
            child_schema_key(block_schema, kind, parent).and_then(|key| schemas.get(&key))
        {
            return schema.description;
        }
    }
    block_schema.description
}
