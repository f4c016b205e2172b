//! Schemas shared between job, group and task scopes.

use super::{
    AttributeSchema, BlockSchema, BodySchema, DefaultValue, LiteralKind, SchemaLink,
};

/// Free-form metadata map. Any attribute name is accepted.
pub(crate) static META: BodySchema = BodySchema {
    description: "Specifies a key-value map that annotates the job, group or task with user-defined metadata.",
    attributes: &[],
    blocks: &[],
    any_attribute: true,
};

pub(crate) static CONSTRAINT: BodySchema = BodySchema {
    description: "Restricts the set of eligible nodes based on node properties or metadata.",
    attributes: &[
        AttributeSchema {
            name: "attribute",
            description: "Specifies the name or reference of the attribute to examine for the constraint.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "operator",
            description: "Specifies the comparison operator. Valid options include `=`, `!=`, `>`, `>=`, `<`, `<=`, `distinct_hosts`, `regexp`, `version` and `semver`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("=")),
        },
        AttributeSchema {
            name: "value",
            description: "Specifies the value to compare the attribute against using the specified operation.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static AFFINITY: BodySchema = BodySchema {
    description: "Expresses placement preference for a set of nodes, weighted rather than mandatory.",
    attributes: &[
        AttributeSchema {
            name: "attribute",
            description: "Specifies the name or reference of the attribute to examine for the affinity.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "operator",
            description: "Specifies the comparison operator. Valid options include `=`, `!=`, `>`, `>=`, `<`, `<=`, `regexp`, `version` and `set_contains`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("=")),
        },
        AttributeSchema {
            name: "value",
            description: "Specifies the value to compare the attribute against using the specified operation.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "weight",
            description: "Specifies a weight for the affinity, from -100 to 100. Negative weights act as anti-affinities.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(50)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static SPREAD: BodySchema = BodySchema {
    description: "Spreads allocations across a node attribute or metadata, optionally weighting specific target values.",
    attributes: &[
        AttributeSchema {
            name: "attribute",
            description: "Specifies the name or reference of the attribute to use for the spread.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "weight",
            description: "Specifies a weight for the spread, from 0 to 100, used during scoring against other spreads.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(0)),
        },
    ],
    blocks: &[BlockSchema {
        name: "target",
        description: "Specifies one attribute value and the percentage of allocations it should receive.",
        labeled: true,
        link: SchemaLink::Simple("target"),
    }],
    any_attribute: false,
};

pub(crate) static TARGET: BodySchema = BodySchema {
    description: "One target value of a spread and its desired share of allocations.",
    attributes: &[
        AttributeSchema {
            name: "value",
            description: "Specifies the attribute value being targeted.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "percent",
            description: "Specifies the percentage of allocations associated with this target value, from 0 to 100.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static VAULT: BodySchema = BodySchema {
    description: "Makes a Vault token available to the tasks in scope.",
    attributes: &[
        AttributeSchema {
            name: "policies",
            description: "Specifies the set of Vault policies that the tasks are allowed to access.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "role",
            description: "Specifies the Vault role used when retrieving a token, if not using the default workload identity role.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "env",
            description: "Specifies if the `VAULT_TOKEN` and `VAULT_NAMESPACE` environment variables should be set when starting the task.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(true)),
        },
        AttributeSchema {
            name: "change_mode",
            description: "Specifies the behavior Nomad should take if the Vault token changes. Valid options are `noop`, `restart` and `signal`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("restart")),
        },
        AttributeSchema {
            name: "change_signal",
            description: "Specifies the signal to send to the task as a string like \"SIGUSR1\". Required when `change_mode` is `signal`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static VARIABLE: BodySchema = BodySchema {
    description: "Declares an input variable that can be set when submitting the job.",
    attributes: &[
        AttributeSchema {
            name: "type",
            description: "Specifies the type constraint for the variable, e.g. `string`, `number`, `bool` or a collection type.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "default",
            // No literal type constraint: the default may be any value the
            // declared type allows.
            description: "Specifies a default value for the variable, making it optional.",
            required: false,
            value_type: None,
            default: None,
        },
        AttributeSchema {
            name: "description",
            description: "Specifies a human readable description of the variable's purpose.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};
