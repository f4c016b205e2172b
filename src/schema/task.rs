//! Task scoped schemas.
//!
//! The `config` block is the one dependent body in the corpus: its schema is
//! selected by the sibling `driver` attribute and registered under the
//! `"config:<driver>"` composite keys.

use super::{
    AttributeSchema, BlockSchema, BodySchema, DefaultValue, LiteralKind, SchemaLink,
};

pub(crate) static TASK: BodySchema = BodySchema {
    description: "Creates an individual unit of work, such as a Docker container, web application, or batch processing job.",
    attributes: &[
        AttributeSchema {
            name: "driver",
            description: "Specifies the task driver that should be used to run the task. Examples include `docker`, `qemu`, `java` and `exec`.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "kill_timeout",
            description: "Specifies the duration to wait for an application to gracefully quit before force-killing. Nomad first sends a `kill_signal`; if the task does not exit before the configured timeout, `SIGKILL` is sent.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("5s")),
        },
        AttributeSchema {
            name: "kill_signal",
            description: "Specifies a configurable kill signal for a task, where the default is SIGINT. Only supported for drivers sending signals.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "leader",
            description: "Specifies whether the task is the leader task of the task group. If set to `true`, when the leader task completes all other tasks within the group are gracefully shutdown.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "shutdown_delay",
            description: "Specifies the duration to wait when killing a task between removing its service registrations and sending it a shutdown signal.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("0s")),
        },
        AttributeSchema {
            name: "user",
            description: "Specifies the user that will run the task. Defaults to `nobody` for the `exec` and `java` drivers; Docker images specify their own default users.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "kind",
            description: "Used internally to manage tasks according to the value of this field. Initial use case is for Consul service mesh.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
    ],
    blocks: &[
        BlockSchema {
            name: "config",
            description: "Specifies the driver configuration, which is passed directly to the driver to start the task. The details of configurations are specific to each driver.",
            labeled: false,
            link: SchemaLink::Dependent { discriminator: "driver" },
        },
        BlockSchema {
            name: "artifact",
            description: "Defines an artifact to download before running the task. This may be specified multiple times to download multiple artifacts.",
            labeled: false,
            link: SchemaLink::Simple("artifact"),
        },
        BlockSchema {
            name: "env",
            description: "Specifies environment variables that will be passed to the running process.",
            labeled: false,
            link: SchemaLink::Simple("env"),
        },
        BlockSchema {
            name: "identity",
            description: "Expose a Workload Identity to the task.",
            labeled: false,
            link: SchemaLink::Simple("identity"),
        },
        BlockSchema {
            name: "lifecycle",
            description: "Specifies when a task is run within the lifecycle of a task group.",
            labeled: false,
            link: SchemaLink::Simple("lifecycle"),
        },
        BlockSchema {
            name: "logs",
            description: "Specifies logging configuration for the stdout and stderr of the task.",
            labeled: false,
            link: SchemaLink::Simple("logs"),
        },
        BlockSchema {
            name: "meta",
            description: "Specifies a key-value map that annotates the task with user-defined metadata.",
            labeled: false,
            link: SchemaLink::Simple("meta"),
        },
        BlockSchema {
            name: "resources",
            description: "Specifies the minimum resource requirements such as RAM, CPU and devices.",
            labeled: false,
            link: SchemaLink::Simple("resources"),
        },
        BlockSchema {
            name: "restart",
            description: "Specifies the task's restart policy, overriding the group level policy.",
            labeled: false,
            link: SchemaLink::Simple("restart"),
        },
        BlockSchema {
            name: "service",
            description: "Specifies integrations with Nomad or Consul for service discovery. Nomad automatically registers the service when the task is started and de-registers it when the task dies.",
            labeled: false,
            link: SchemaLink::Simple("service"),
        },
        BlockSchema {
            name: "template",
            description: "Specifies the set of templates to render for the task. Templates can be used to inject both static and dynamic configuration with data populated from environment variables, Consul and Vault.",
            labeled: false,
            link: SchemaLink::Simple("template"),
        },
        BlockSchema {
            name: "constraint",
            description: "Specifies user-defined constraints on the task. This can be provided multiple times.",
            labeled: false,
            link: SchemaLink::Simple("constraint"),
        },
        BlockSchema {
            name: "affinity",
            description: "Expresses placement preference for this task. This can be provided multiple times.",
            labeled: false,
            link: SchemaLink::Simple("affinity"),
        },
        BlockSchema {
            name: "vault",
            description: "Specifies the set of Vault policies required by the task. This overrides any `vault` block set at the `group` or `job` level.",
            labeled: false,
            link: SchemaLink::Simple("vault"),
        },
        BlockSchema {
            name: "volume_mount",
            description: "Specifies where a group volume should be mounted.",
            labeled: false,
            link: SchemaLink::Simple("volume_mount"),
        },
    ],
    any_attribute: false,
};

pub(crate) static RESOURCES: BodySchema = BodySchema {
    description: "Describes the minimum resource requirements the task needs to execute.",
    attributes: &[
        AttributeSchema {
            name: "cpu",
            description: "Specifies the CPU required to run this task in MHz.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(100)),
        },
        AttributeSchema {
            name: "cores",
            description: "Specifies the number of CPU cores to reserve for the task. This may not be used with `cpu`.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: None,
        },
        AttributeSchema {
            name: "memory",
            description: "Specifies the memory required in MB.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(300)),
        },
        AttributeSchema {
            name: "memory_max",
            description: "Optionally, specifies the maximum memory the task may use, if the client has excess memory capacity, in MB.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static LOGS: BodySchema = BodySchema {
    description: "Configures log rotation for the task's stdout and stderr.",
    attributes: &[
        AttributeSchema {
            name: "max_files",
            description: "Specifies the maximum number of rotated files Nomad will retain for stdout and stderr. Each stream is tracked individually.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(10)),
        },
        AttributeSchema {
            name: "max_file_size",
            description: "Specifies the maximum size of each rotated file in MB.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: Some(DefaultValue::Num(10)),
        },
        AttributeSchema {
            name: "disabled",
            description: "Specifies that log collection should be disabled for this task.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static TEMPLATE: BodySchema = BodySchema {
    description: "Renders a template, with data populated from environment variables, Consul and Vault, into the task's allocation directory.",
    attributes: &[
        AttributeSchema {
            name: "source",
            description: "Specifies the path to the template to be rendered. One of `source` or `data` must be specified.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "destination",
            description: "Specifies the location where the resulting template should be rendered, relative to the task working directory.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "data",
            description: "Specifies the raw template to execute. One of `source` or `data` must be specified.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "change_mode",
            description: "Specifies the behavior Nomad should take if the rendered template changes. Valid options are `noop`, `restart`, `signal` and `script`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("restart")),
        },
        AttributeSchema {
            name: "change_signal",
            description: "Specifies the signal to send to the task as a string like \"SIGUSR1\". This option is required if `change_mode` is `signal`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "perms",
            description: "Specifies the rendered template's permissions.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("644")),
        },
        AttributeSchema {
            name: "env",
            description: "Specifies the template should be read back in as environment variables for the task.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "left_delimiter",
            description: "Specifies the left delimiter to use in the template.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("{{")),
        },
        AttributeSchema {
            name: "right_delimiter",
            description: "Specifies the right delimiter to use in the template.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("}}")),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static ARTIFACT: BodySchema = BodySchema {
    description: "Instructs Nomad to fetch and unpack a remote resource, such as a file, tarball, or binary, before the task starts.",
    attributes: &[
        AttributeSchema {
            name: "source",
            description: "Specifies the URL of the artifact to download.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "destination",
            description: "Specifies the directory path to download the artifact, relative to the root of the task's directory.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("local/")),
        },
        AttributeSchema {
            name: "mode",
            description: "One of `any`, `file`, or `dir`. If `any`, the artifact may be a file or directory.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("any")),
        },
        AttributeSchema {
            name: "options",
            description: "Specifies configuration parameters to fetch the artifact, such as checksums.",
            required: false,
            value_type: Some(LiteralKind::MapOfString),
            default: None,
        },
        AttributeSchema {
            name: "headers",
            description: "Specifies HTTP headers to set when fetching the artifact.",
            required: false,
            value_type: Some(LiteralKind::MapOfString),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

/// Free-form environment variable map.
pub(crate) static ENV: BodySchema = BodySchema {
    description: "Specifies environment variables that will be passed to the running process.",
    attributes: &[],
    blocks: &[],
    any_attribute: true,
};

pub(crate) static LIFECYCLE: BodySchema = BodySchema {
    description: "Specifies when a task is run within the lifecycle of a group: as a prestart, poststart or poststop hook of the main tasks.",
    attributes: &[
        AttributeSchema {
            name: "hook",
            description: "Specifies when a task should run within the lifecycle of a group. Valid options are `prestart`, `poststart` and `poststop`.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "sidecar",
            description: "Controls whether a task is ephemeral or long-lived within the task group.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static IDENTITY: BodySchema = BodySchema {
    description: "Exposes a Workload Identity JWT to the task.",
    attributes: &[
        AttributeSchema {
            name: "name",
            description: "The name of the workload identity, which must be unique per task.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("default")),
        },
        AttributeSchema {
            name: "aud",
            description: "The audience field for the workload identity.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "env",
            description: "If true the workload identity will be available in the task's `NOMAD_TOKEN` environment variable.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "file",
            description: "If true the workload identity will be available in the task's filesystem via the path `secrets/nomad_token`.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "change_mode",
            description: "Specifies the behavior Nomad should take if the token changes. Valid options are `noop`, `restart` and `signal`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("noop")),
        },
        AttributeSchema {
            name: "ttl",
            description: "The lifetime of the identity before it expires and is automatically rotated.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};
