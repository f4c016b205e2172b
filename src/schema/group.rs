//! Group scoped schemas: networking, storage and restart policies.

use super::{
    AttributeSchema, BlockSchema, BodySchema, DefaultValue, LiteralKind, SchemaLink,
};

pub(crate) static GROUP: BodySchema = BodySchema {
    description: "Defines a series of tasks that should be co-located on the same client. All tasks within a group are placed on the same node.",
    attributes: &[
        AttributeSchema {
            name: "count",
            description: "Specifies the number of instances that should be running under for this group. This value must be non-negative.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(1)),
        },
        AttributeSchema {
            name: "shutdown_delay",
            description: "Specifies the duration to wait when stopping a group's tasks. The delay occurs between Consul or Nomad service deregistration and sending each task a shutdown signal.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("0s")),
        },
    ],
    blocks: &[
        BlockSchema {
            name: "task",
            description: "Creates an individual unit of work, such as a Docker container, web application, or batch processing job.",
            labeled: true,
            link: SchemaLink::Simple("task"),
        },
        BlockSchema {
            name: "service",
            description: "Specifies integrations with Nomad or Consul for service discovery. Nomad automatically registers the service when an allocation is started and de-registers it when it dies.",
            labeled: false,
            link: SchemaLink::Simple("service"),
        },
        BlockSchema {
            name: "network",
            description: "Specifies the network requirements and configuration, including static and dynamic port allocations, for the group.",
            labeled: false,
            link: SchemaLink::Simple("network"),
        },
        BlockSchema {
            name: "restart",
            description: "Specifies the restart policy for all tasks in this group. If omitted, a default policy exists for each job type.",
            labeled: false,
            link: SchemaLink::Simple("restart"),
        },
        BlockSchema {
            name: "reschedule",
            description: "Specifies the group's rescheduling strategy, overriding the job level policy.",
            labeled: false,
            link: SchemaLink::Simple("reschedule"),
        },
        BlockSchema {
            name: "ephemeral_disk",
            description: "Specifies the ephemeral disk requirements of the group. The ephemeral disk is shared between all tasks in the group.",
            labeled: false,
            link: SchemaLink::Simple("ephemeral_disk"),
        },
        BlockSchema {
            name: "volume",
            description: "Specifies a host or CSI volume that should be made available to the group's tasks.",
            labeled: true,
            link: SchemaLink::Simple("volume"),
        },
        BlockSchema {
            name: "meta",
            description: "Specifies a key-value map that annotates the group with user-defined metadata.",
            labeled: false,
            link: SchemaLink::Simple("meta"),
        },
        BlockSchema {
            name: "constraint",
            description: "Restricts the set of eligible nodes for this group. This can be provided multiple times.",
            labeled: false,
            link: SchemaLink::Simple("constraint"),
        },
        BlockSchema {
            name: "affinity",
            description: "Expresses placement preference for this group. This can be provided multiple times.",
            labeled: false,
            link: SchemaLink::Simple("affinity"),
        },
        BlockSchema {
            name: "spread",
            description: "Spreads this group's allocations across a node attribute or metadata.",
            labeled: false,
            link: SchemaLink::Simple("spread"),
        },
        BlockSchema {
            name: "update",
            description: "Specifies the group's update strategy, overriding the job level policy.",
            labeled: false,
            link: SchemaLink::Simple("update"),
        },
        BlockSchema {
            name: "migrate",
            description: "Specifies the group's migration strategy, overriding the job level policy.",
            labeled: false,
            link: SchemaLink::Simple("migrate"),
        },
        BlockSchema {
            name: "vault",
            description: "Specifies the set of Vault policies required by all tasks in this group.",
            labeled: false,
            link: SchemaLink::Simple("vault"),
        },
    ],
    any_attribute: false,
};

pub(crate) static RESTART: BodySchema = BodySchema {
    description: "Configures a group's behavior on task failure.",
    attributes: &[
        AttributeSchema {
            name: "attempts",
            description: "Specifies the number of restarts allowed in the configured interval.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(2)),
        },
        AttributeSchema {
            name: "delay",
            description: "Specifies the duration to wait before restarting a task.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("15s")),
        },
        AttributeSchema {
            name: "interval",
            description: "Specifies the duration which begins when the first task starts and ensures that only `attempts` number of restarts happens within it.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("30m")),
        },
        AttributeSchema {
            name: "mode",
            description: "Controls the behavior when the task fails more than `attempts` times in an interval. Valid options are `delay` and `fail`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("fail")),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static EPHEMERAL_DISK: BodySchema = BodySchema {
    description: "Describes the ephemeral disk requirements of the group.",
    attributes: &[
        AttributeSchema {
            name: "migrate",
            description: "When `sticky` is true, specifies that the Nomad client should make a best-effort attempt to migrate the data from the previous allocation even if the previous allocation was on another client.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "size",
            description: "Specifies the size of the ephemeral disk in MB.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(300)),
        },
        AttributeSchema {
            name: "sticky",
            description: "Specifies that Nomad should make a best-effort attempt to place the updated allocation on the same machine.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static NETWORK: BodySchema = BodySchema {
    description: "Specifies the networking requirements for the group, including the network mode and port allocations.",
    attributes: &[AttributeSchema {
        name: "mode",
        description: "Mode of the network. Valid options are `none`, `bridge`, `host` and `cni/<cni network name>`.",
        required: false,
        value_type: Some(LiteralKind::String),
        default: Some(DefaultValue::Str("host")),
    }],
    blocks: &[
        BlockSchema {
            name: "port",
            description: "Specifies a TCP/UDP port allocation. Each port may be reserved statically or allocated dynamically.",
            labeled: true,
            link: SchemaLink::Simple("port"),
        },
        BlockSchema {
            name: "dns",
            description: "Sets the DNS configuration for the allocations. Only supported in `bridge` and `cni` network modes.",
            labeled: false,
            link: SchemaLink::Simple("dns"),
        },
    ],
    any_attribute: false,
};

pub(crate) static PORT: BodySchema = BodySchema {
    description: "Specifies a TCP/UDP port allocation, mapping a port on the host to a port inside the allocation.",
    attributes: &[
        AttributeSchema {
            name: "static",
            description: "Specifies the static TCP/UDP port to allocate. If omitted, a dynamic port is chosen.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: None,
        },
        AttributeSchema {
            name: "to",
            description: "Applicable when using \"bridge\" mode to configure port to map to inside the task's network namespace. `-1` sets the mapped port equal to the dynamic port allocated by the scheduler.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: None,
        },
        AttributeSchema {
            name: "host_network",
            description: "Designates the host network name to use when allocating the port.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static DNS: BodySchema = BodySchema {
    description: "DNS configuration applied to the allocations.",
    attributes: &[
        AttributeSchema {
            name: "servers",
            description: "Sets the DNS nameservers the allocation uses for name resolution.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "searches",
            description: "Sets the search list for hostname lookup.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "options",
            description: "Sets internal resolver variables.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static VOLUME: BodySchema = BodySchema {
    description: "Requests a host or CSI volume for the group. Tasks reference it through a `volume_mount`.",
    attributes: &[
        AttributeSchema {
            name: "type",
            description: "Specifies the type of a given volume. Valid options are `host` and `csi`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("host")),
        },
        AttributeSchema {
            name: "source",
            description: "The name of the volume to request. When using `host_volume`'s this should match the published name of the host volume.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "read_only",
            description: "Specifies that the group only requires read only access to a volume and is used as the default value for the `volume_mount -> read_only` configuration.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static VOLUME_MOUNT: BodySchema = BodySchema {
    description: "Mounts a group volume into a task.",
    attributes: &[
        AttributeSchema {
            name: "volume",
            description: "Specifies the group volume that the mount is going to access.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "destination",
            description: "Specifies where the volume should be mounted inside the task's allocation.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "read_only",
            description: "When a group volume is writeable, you may specify that it is read only on a per mount level.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "propagation_mode",
            description: "Specifies the mount propagation behavior. Valid options are `private`, `host-to-task` and `bidirectional`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("private")),
        },
    ],
    blocks: &[],
    any_attribute: false,
};
