use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotrunner_core::command::DEFAULT_BASE_COMMAND;

use crate::commands::{
    discover_command, init_command, run_all_command, run_command, session_command,
};

#[derive(Parser, Debug)]
#[command(name = "dotrunner")]
#[command(version, about = "Discover and run dotnet tests", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .dotrunner.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command that runs tests
    #[arg(long, global = true, default_value = DEFAULT_BASE_COMMAND)]
    pub base_command: String,

    /// Where test results are written when results integration is enabled
    #[arg(long, global = true)]
    pub results_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tests in the project
    #[command(visible_alias = "d")]
    Discover,
    /// Run a single test by fully qualified name
    #[command(visible_alias = "r")]
    Run {
        /// Fully qualified test name, e.g. Api.Tests.UserTests.Creates
        name: String,

        /// Pass --no-build regardless of configuration
        #[arg(short, long)]
        skip_build: bool,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Run every test in the project
    #[command(visible_alias = "a")]
    RunAll {
        /// Pass --no-build regardless of configuration
        #[arg(short, long)]
        skip_build: bool,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Read commands from stdin: discover, run <name>, run-all, rerun, quit
    Session {
        /// Print commands instead of executing them
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Write a .dotrunner.json with the default options
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub async fn execute(self, global: &GlobalArgs) -> Result<()> {
        tracing::debug!("Executing {:?}", self);
        match self {
            Commands::Discover => discover_command(global).await,
            Commands::Run {
                name,
                skip_build,
                dry_run,
            } => run_command(global, &name, skip_build, dry_run),
            Commands::RunAll {
                skip_build,
                dry_run,
            } => run_all_command(global, skip_build, dry_run),
            Commands::Session { dry_run } => session_command(global, dry_run).await,
            Commands::Init { force } => init_command(global, force),
        }
    }
}
