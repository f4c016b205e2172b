//! Top level and job scoped schemas.

use super::{
    AttributeSchema, BlockSchema, BodySchema, DefaultValue, LiteralKind, SchemaLink,
};

/// Schema for the top level of a job specification file.
pub(crate) static ROOT: BodySchema = BodySchema {
    description: "A Nomad job specification file.",
    attributes: &[],
    blocks: &[
        BlockSchema {
            name: "job",
            description: "The top level construct of a job specification. A job is a declarative unit of work submitted to the scheduler, composed of one or more task groups.",
            labeled: true,
            link: SchemaLink::Simple("job"),
        },
        BlockSchema {
            name: "variable",
            description: "Declares an input variable that can be set when submitting the job.",
            labeled: true,
            link: SchemaLink::Simple("variable"),
        },
    ],
    any_attribute: false,
};

pub(crate) static JOB: BodySchema = BodySchema {
    description: "Declares a job: the scheduler type, placement constraints, and the task groups to run.",
    attributes: &[
        AttributeSchema {
            name: "all_at_once",
            description: "Controls whether the scheduler can make partial placements if optimistic scheduling resulted in an oversubscribed node. Should only be used for special circumstances.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "datacenters",
            description: "A list of datacenters in the region which are eligible for task placement. Supports wildcard globbing with `*` for multi-character matching. Defaults to `[\"*\"]`, allowing placement in any available datacenter.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: Some(DefaultValue::List(&["*"])),
        },
        AttributeSchema {
            name: "name",
            description: "Specifies a name for the job, which otherwise defaults to the job ID.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "namespace",
            description: "The namespace in which to execute the job.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("default")),
        },
        AttributeSchema {
            name: "node_pool",
            description: "Specifies the node pool to place the job in. The node pool must exist when the job is registered.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("default")),
        },
        AttributeSchema {
            name: "priority",
            description: "Specifies the job priority used to prioritize scheduling and access to resources. Must be between 1 and `job_max_priority` inclusively; larger values correspond to a higher priority. Only has an effect when job preemption is enabled.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(50)),
        },
        AttributeSchema {
            name: "region",
            description: "The region in which to execute the job.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("global")),
        },
        AttributeSchema {
            name: "type",
            description: "Specifies the Nomad scheduler to use. Nomad provides the `service`, `system`, `batch`, and `sysbatch` schedulers.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("service")),
        },
    ],
    blocks: &[
        BlockSchema {
            name: "group",
            description: "Specifies the start of a group of tasks. This can be provided multiple times to define additional groups. Group names must be unique within the job file.",
            labeled: true,
            link: SchemaLink::Simple("group"),
        },
        BlockSchema {
            name: "constraint",
            description: "Restricts the set of eligible nodes. This can be provided multiple times to define additional constraints.",
            labeled: false,
            link: SchemaLink::Simple("constraint"),
        },
        BlockSchema {
            name: "affinity",
            description: "Expresses placement preference for a set of nodes. This can be provided multiple times to define preferred placement criteria.",
            labeled: false,
            link: SchemaLink::Simple("affinity"),
        },
        BlockSchema {
            name: "spread",
            description: "Spreads allocations across a node attribute or metadata. This can be provided multiple times.",
            labeled: false,
            link: SchemaLink::Simple("spread"),
        },
        BlockSchema {
            name: "meta",
            description: "Specifies a key-value map that annotates the job with user-defined metadata.",
            labeled: false,
            link: SchemaLink::Simple("meta"),
        },
        BlockSchema {
            name: "migrate",
            description: "Specifies the group's strategy for migrating off of draining nodes. Only service jobs with a count greater than 1 support migrate blocks.",
            labeled: false,
            link: SchemaLink::Simple("migrate"),
        },
        BlockSchema {
            name: "parameterized",
            description: "Marks the job as parameterized so that it can be dispatched against.",
            labeled: false,
            link: SchemaLink::Simple("parameterized"),
        },
        BlockSchema {
            name: "periodic",
            description: "Allows the job to be scheduled at fixed times, dates or intervals.",
            labeled: false,
            link: SchemaLink::Simple("periodic"),
        },
        BlockSchema {
            name: "reschedule",
            description: "Specifies a rescheduling strategy applied when an allocation's status becomes \"failed\".",
            labeled: false,
            link: SchemaLink::Simple("reschedule"),
        },
        BlockSchema {
            name: "update",
            description: "Specifies the job's update strategy. When omitted, a default update strategy is applied.",
            labeled: false,
            link: SchemaLink::Simple("update"),
        },
        BlockSchema {
            name: "vault",
            description: "Specifies the set of Vault policies required by all tasks in this job.",
            labeled: false,
            link: SchemaLink::Simple("vault"),
        },
    ],
    any_attribute: false,
};

pub(crate) static UPDATE: BodySchema = BodySchema {
    description: "Controls how allocations are updated when a new job version is submitted.",
    attributes: &[
        AttributeSchema {
            name: "max_parallel",
            description: "Specifies the number of allocations within a task group that can be updated at the same time.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(1)),
        },
        AttributeSchema {
            name: "health_check",
            description: "Specifies the mechanism in which allocation health is determined. Valid options are `checks`, `task_states` and `manual`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("checks")),
        },
        AttributeSchema {
            name: "min_healthy_time",
            description: "Specifies the minimum time an allocation must be in the healthy state before it is marked as healthy.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("10s")),
        },
        AttributeSchema {
            name: "healthy_deadline",
            description: "Specifies the deadline by which an allocation must be marked as healthy, after which it is automatically transitioned to unhealthy.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("5m")),
        },
        AttributeSchema {
            name: "progress_deadline",
            description: "Specifies the deadline by which an allocation must be marked as healthy before the deployment is failed.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("10m")),
        },
        AttributeSchema {
            name: "auto_revert",
            description: "Specifies if the job should auto-revert to the last stable version on deployment failure.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "auto_promote",
            description: "Specifies if the job should auto-promote to the canary version when all canaries become healthy.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "canary",
            description: "Specifies that changes to the job that would result in destructive updates should create the specified number of canaries without stopping any previous allocations.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(0)),
        },
        AttributeSchema {
            name: "stagger",
            description: "Specifies the delay between each set of `max_parallel` updates when using deprecated rolling updates.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("30s")),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static MIGRATE: BodySchema = BodySchema {
    description: "Controls how allocations are migrated off of draining nodes.",
    attributes: &[
        AttributeSchema {
            name: "max_parallel",
            description: "Specifies the number of allocations that can be migrated at the same time.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(1)),
        },
        AttributeSchema {
            name: "health_check",
            description: "Specifies the mechanism in which allocation health is determined. Valid options are `checks` and `task_states`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("checks")),
        },
        AttributeSchema {
            name: "min_healthy_time",
            description: "Specifies the minimum time an allocation must be in the healthy state before being considered migrated.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("10s")),
        },
        AttributeSchema {
            name: "healthy_deadline",
            description: "Specifies the deadline by which an allocation must be marked as healthy, after which the migration is failed.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("5m")),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static PERIODIC: BodySchema = BodySchema {
    description: "Schedules the job at fixed times, dates or intervals using a cron expression.",
    attributes: &[
        AttributeSchema {
            name: "cron",
            description: "Specifies a cron expression configuring the interval to launch the job.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "prohibit_overlap",
            description: "Specifies if this job should wait until previous instances of the job have completed before launching a new instance.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "time_zone",
            description: "Specifies the time zone to evaluate the next launch interval against.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("UTC")),
        },
        AttributeSchema {
            name: "enabled",
            description: "Specifies if this job should run at all.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(true)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static PARAMETERIZED: BodySchema = BodySchema {
    description: "Marks the job as parameterized: the job acts as a function that can be dispatched with arguments.",
    attributes: &[
        AttributeSchema {
            name: "payload",
            description: "Specifies the requirement of providing a payload when dispatching against the parameterized job. Valid options are `optional`, `required` and `forbidden`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("optional")),
        },
        AttributeSchema {
            name: "meta_required",
            description: "Specifies the set of metadata keys that must be provided when dispatching against the job.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "meta_optional",
            description: "Specifies the set of metadata keys that may be provided when dispatching against the job.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static RESCHEDULE: BodySchema = BodySchema {
    description: "Specifies when and how failed allocations are rescheduled onto other nodes.",
    attributes: &[
        AttributeSchema {
            name: "attempts",
            description: "Specifies the number of reschedule attempts allowed in the configured interval.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: None,
        },
        AttributeSchema {
            name: "interval",
            description: "Specifies the sliding window which begins when the first reschedule attempt starts and ensures that only `attempts` number of reschedule happen within it.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "delay",
            description: "Specifies the duration to wait before attempting to reschedule a failed allocation.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("30s")),
        },
        AttributeSchema {
            name: "delay_function",
            description: "Specifies the function used to calculate subsequent reschedule delays. Valid options are `constant`, `exponential` and `fibonacci`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("exponential")),
        },
        AttributeSchema {
            name: "max_delay",
            description: "The upper bound of the delay when `delay_function` is `exponential` or `fibonacci`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("1h")),
        },
        AttributeSchema {
            name: "unlimited",
            description: "Enables unlimited reschedule attempts. If this is set to `true` the `attempts` and `interval` fields are not used.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(true)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};
