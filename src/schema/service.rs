//! Service discovery and health check schemas.

use super::{
    AttributeSchema, BlockSchema, BodySchema, DefaultValue, LiteralKind, SchemaLink,
};

pub(crate) static SERVICE: BodySchema = BodySchema {
    description: "Registers the group or task with a service discovery provider so other workloads can locate it.",
    attributes: &[
        AttributeSchema {
            name: "name",
            description: "Specifies the name of the service. If not supplied, the name defaults to `<job>-<taskgroup>-<task>`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "port",
            description: "Specifies the port to advertise for this service. This is the label of a port configured in the `network` block, or a numeric port when `address_mode` is `driver`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "provider",
            description: "Specifies the service registration provider. Valid options are `consul` and `nomad`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("consul")),
        },
        AttributeSchema {
            name: "address",
            description: "Specifies a custom address to advertise in Consul or Nomad service registration.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "address_mode",
            description: "Specifies which address to advertise. Valid options are `alloc`, `api`, `auto`, `driver` and `host`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("auto")),
        },
        AttributeSchema {
            name: "tags",
            description: "Specifies the list of tags to associate with this service.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "canary_tags",
            description: "Specifies the list of tags to associate with this service when the service is part of an allocation that is currently a canary.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "task",
            description: "Specifies the name of the Nomad task associated with this service definition. Only available on group services.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "on_update",
            description: "Specifies how checks should be evaluated when determining deployment health. Valid options are `require_healthy`, `ignore_warnings` and `ignore`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("require_healthy")),
        },
    ],
    blocks: &[BlockSchema {
        name: "check",
        description: "Specifies a health check associated with the service, used by the provider to judge the service healthy or unhealthy.",
        labeled: false,
        link: SchemaLink::Simple("check"),
    }],
    any_attribute: false,
};

pub(crate) static CHECK: BodySchema = BodySchema {
    description: "Defines a health check for the enclosing service.",
    attributes: &[
        AttributeSchema {
            name: "name",
            description: "Specifies the name of the health check. If not specified, a name is generated based on the service name.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "type",
            description: "Indicates the check type. For Consul checks, valid options are `grpc`, `http`, `script` and `tcp`. For Nomad checks, valid options are `http` and `tcp`.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "interval",
            description: "Specifies the frequency of the health checks. Specified using a label suffix like \"30s\" or \"1h\"; must be at least \"1s\".",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "timeout",
            description: "Specifies how long to wait for a health check query to succeed. Specified using a label suffix like \"30s\"; must be at least \"1s\".",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "path",
            description: "Specifies the path of the HTTP endpoint which will be queried to observe the health of a service. Nomad automatically adds the IP and port; this is the relative URL. Required for HTTP-based checks.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "port",
            description: "Specifies the label of the port on which the check will be performed. The port label must match one defined in the `network` block. Inherits from the service's `port` if not supplied.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "method",
            description: "Specifies the HTTP method to use for HTTP checks.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("GET")),
        },
        AttributeSchema {
            name: "protocol",
            description: "Specifies the protocol for HTTP-based health checks. Valid options are `http` and `https`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("http")),
        },
        AttributeSchema {
            name: "address_mode",
            description: "Specifies which address this check should use. Valid options are `alloc`, `driver` and `host`. Unlike `port`, this is not inherited from the service.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("host")),
        },
        AttributeSchema {
            name: "command",
            description: "Specifies the command to run for script-based health checks. Must exit 0 for passing, 1 for warning, any other value for failing. Only supported by the Consul provider.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "args",
            description: "Specifies additional arguments to the `command`. Only applies to script-based health checks.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "initial_status",
            description: "Specifies the starting status of the service. Valid options are `passing`, `warning` and `critical`. Only supported by the Consul provider.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "success_before_passing",
            description: "The number of consecutive successful checks required before the service status transitions to `passing`.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(0)),
        },
        AttributeSchema {
            name: "failures_before_critical",
            description: "The number of consecutive failing checks required before the service status transitions to `critical`.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(0)),
        },
        AttributeSchema {
            name: "expose",
            description: "Specifies whether an Expose Path should be automatically generated for this check. Only compatible with Connect-enabled task-group services using the default Connect proxy.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "tls_skip_verify",
            description: "Skips verification of certificates for `https` checks.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "task",
            description: "Specifies the task associated with this check. Scripts are executed within the task's environment.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "on_update",
            description: "Specifies how this check should be evaluated when determining deployment health, overriding the service's value. Valid options are `require_healthy`, `ignore_warnings` and `ignore`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("require_healthy")),
        },
    ],
    blocks: &[BlockSchema {
        name: "check_restart",
        description: "Instructs Nomad when to restart tasks with unhealthy service checks.",
        labeled: false,
        link: SchemaLink::Simple("check_restart"),
    }],
    any_attribute: false,
};

pub(crate) static CHECK_RESTART: BodySchema = BodySchema {
    description: "Restarts tasks whose associated checks stay unhealthy for too long.",
    attributes: &[
        AttributeSchema {
            name: "limit",
            description: "Restart task when a health check has failed `limit` times. A value of 1 causes a restart on the first failure; the default, 0, disables health check based restarts.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(0)),
        },
        AttributeSchema {
            name: "grace",
            description: "Duration to wait after a task starts or restarts before checking its health.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("1s")),
        },
        AttributeSchema {
            name: "ignore_warnings",
            description: "By default checks failing in the warning state count towards the limit; set to true to treat warnings as healthy.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};
