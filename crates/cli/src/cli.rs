use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{configure_command, init_command, tasks_command, version_command};

#[derive(Parser, Debug)]
#[command(name = "spruce")]
#[command(version, about = "Configure SpruceLoom projects", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Spruce {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the project lives and which host properties it sees
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'd', long)]
    pub project_dir: Option<PathBuf>,

    /// Set a host property, overriding spruce.properties (e.g. -P spruce.loom.debug=true)
    #[arg(short = 'P', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply the plugin to a project and print the resulting configuration
    #[command(visible_alias = "c")]
    Configure {
        #[command(flatten)]
        project: ProjectArgs,

        /// Print the full configuration snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the tasks of a configured project, by group
    #[command(visible_alias = "t")]
    Tasks {
        #[command(flatten)]
        project: ProjectArgs,

        /// Also list tasks without a group
        #[arg(short, long)]
        all: bool,
    },
    /// Write a default spruce.json
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<PathBuf>,

        /// Force overwrite existing settings
        #[arg(short, long)]
        force: bool,
    },
    /// Print the tool version
    Version,
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Configure { project, json } => configure_command(&project, json),
            Commands::Tasks { project, all } => tasks_command(&project, all),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
            Commands::Version => version_command(),
        }
    }
}
