use clap::{Parser, Subcommand};

use crate::disk::DEFAULT_DISK_SIZE;

/// Printed to stderr when no usable command is given.
pub const USAGE: &str = "no command given
  run <name>
  list
  create <name> [size]
  edit <name>
";

#[derive(Parser, Debug)]
#[command(name = "qmgr", about = "Personal QEMU virtual machine launcher")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored VM configs
    List,

    /// Boot a VM in the foreground
    Run {
        /// VM name
        name: Option<String>,
    },

    /// Create a disk and a template config, then open it in $VISUAL/$EDITOR
    Create {
        /// VM name
        name: Option<String>,

        /// Disk size passed to qemu-img
        #[arg(default_value = DEFAULT_DISK_SIZE)]
        size: String,
    },

    /// Open a VM config in $VISUAL/$EDITOR
    Edit {
        /// VM name
        name: Option<String>,
    },
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Run { .. } => "run",
            Command::Create { .. } => "create",
            Command::Edit { .. } => "edit",
        }
    }
}
