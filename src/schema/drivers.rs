//! Driver-specific `config` body variants, registered under the
//! `"config:<driver>"` composite keys.

use super::{AttributeSchema, BodySchema, DefaultValue, LiteralKind};

pub(crate) static DOCKER: BodySchema = BodySchema {
    description: "Configuration for the Docker task driver, which runs the task inside a Docker container.",
    attributes: &[
        AttributeSchema {
            name: "image",
            description: "The Docker image to run. The image may include a tag or custom URL. By default it is fetched from Docker Hub; if the tag is omitted or equal to `latest` the driver always tries to pull the image.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "command",
            description: "The command to run when starting the container.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "args",
            description: "A list of arguments to the optional `command`. If no `command` is specified, the arguments are passed directly to the container.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "entrypoint",
            description: "A string list overriding the image's entrypoint.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "ports",
            description: "A list of port labels from the group network block which are exposed on the container.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "image_pull_timeout",
            description: "A time duration that controls how long Nomad waits before cancelling an in-progress pull of the Docker image.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("5m")),
        },
        AttributeSchema {
            name: "force_pull",
            description: "Always pull the most recent image instead of using an existing local image. Should be set to `true` if repository tags are mutable.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "auth_soft_fail",
            description: "Don't fail the task on an auth failure; attempt to continue without auth. Needed in every job using a public image when the client has an auth helper configured.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "privileged",
            description: "Specifies if the container should be run in privileged mode, giving it access to all devices on the host. The client must allow privileged containers.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "work_dir",
            description: "The working directory the container is started in.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "network_mode",
            description: "The network mode to be used for the container. Valid options include `default`, `bridge`, `host`, `none` or `container:<name|id>`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "hostname",
            description: "The hostname to assign to the container. Not supported in `bridge` network mode.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "labels",
            description: "A key-value map of labels to set on the container.",
            required: false,
            value_type: Some(LiteralKind::MapOfString),
            default: None,
        },
        AttributeSchema {
            name: "extra_hosts",
            description: "A list of hosts, given as host:IP, to be added to /etc/hosts in the container.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "dns_servers",
            description: "A list of DNS servers for the container to use. When using bridge networking, set DNS options in the group network block instead.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "shm_size",
            description: "The size (bytes) of /dev/shm for the container.",
            required: false,
            value_type: Some(LiteralKind::Number),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static EXEC: BodySchema = BodySchema {
    description: "Configuration for the exec task driver, which runs the command in an isolated environment using the host's kernel facilities.",
    attributes: &[
        AttributeSchema {
            name: "command",
            description: "The command to execute. Must be provided. If executing a binary that exists on the host, the path must be absolute.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "args",
            description: "A list of arguments to the command.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "pid_mode",
            description: "Set to `private` to enable PID namespace isolation for this task, or `host` to disable it.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "ipc_mode",
            description: "Set to `private` to enable IPC namespace isolation for this task, or `host` to disable it.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "cap_add",
            description: "A list of Linux capabilities to enable for the task.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "cap_drop",
            description: "A list of Linux capabilities to disable for the task.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static RAW_EXEC: BodySchema = BodySchema {
    description: "Configuration for the raw_exec task driver, which runs the command with no isolation as the Nomad process user.",
    attributes: &[
        AttributeSchema {
            name: "command",
            description: "The command to execute. Must be provided. If executing a binary that exists on the host, the path must be absolute.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "args",
            description: "A list of arguments to the command.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "no_cgroups",
            description: "Disable the use of cgroups for tracking and killing the task's processes.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static JAVA: BodySchema = BodySchema {
    description: "Configuration for the java task driver, which runs a jar or class file in a JVM.",
    attributes: &[
        AttributeSchema {
            name: "class",
            description: "The name of the class to run. If `jar_path` is specified and the manifest specifies a main class, this is optional.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "class_path",
            description: "The Java class search path, specifying where the driver finds class files.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "jar_path",
            description: "The path to the downloaded jar. The file name is relative to the task's working directory.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "args",
            description: "A list of arguments to the jar's main method.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "jvm_options",
            description: "A list of JVM options to be passed while invoking java, e.g. `[\"-Xmx600m\"]`.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};

pub(crate) static QEMU: BodySchema = BodySchema {
    description: "Configuration for the qemu task driver, which starts the task's virtual machine image with QEMU.",
    attributes: &[
        AttributeSchema {
            name: "image_path",
            description: "The path to the downloaded image. The file name is relative to the task's working directory.",
            required: true,
            value_type: Some(LiteralKind::String),
            default: None,
        },
        AttributeSchema {
            name: "accelerator",
            description: "The type of accelerator to use in the invocation. If the host machine has QEMU KVM support, users can specify `kvm`.",
            required: false,
            value_type: Some(LiteralKind::String),
            default: Some(DefaultValue::Str("tcg")),
        },
        AttributeSchema {
            name: "graceful_shutdown",
            description: "Send an ACPI shutdown signal to the virtual machine before killing it, allowing guests with ACPI support to shut down cleanly.",
            required: false,
            value_type: Some(LiteralKind::Bool),
            default: Some(DefaultValue::Bool(false)),
        },
        AttributeSchema {
            name: "args",
            description: "A list of extra arguments to the qemu binary, e.g. to add a device.",
            required: false,
            value_type: Some(LiteralKind::ListOfString),
            default: None,
        },
        AttributeSchema {
            name: "port_map",
            description: "A key-value map of port labels, mapping a label to the port inside the guest.",
            required: false,
            value_type: Some(LiteralKind::MapOfString),
            default: None,
        },
    ],
    blocks: &[],
    any_attribute: false,
};
