use anyhow::Result;
use tracing::debug;

use super::executor::CliExecutor;
use crate::cli::GlobalArgs;
use crate::utils::Workspace;

pub fn run_command(global: &GlobalArgs, name: &str, skip_build: bool, dry_run: bool) -> Result<()> {
    let workspace = Workspace::from_args(global)?;
    let orchestrator = workspace.orchestrator(global, CliExecutor::new(dry_run));

    let command_line = orchestrator.run_test_by_name(name, skip_build);
    debug!("Issued: {}", command_line);

    exit_with_status(orchestrator.executor())
}

pub fn run_all_command(global: &GlobalArgs, skip_build: bool, dry_run: bool) -> Result<()> {
    let workspace = Workspace::from_args(global)?;
    let orchestrator = workspace.orchestrator(global, CliExecutor::new(dry_run));

    let command_line = orchestrator.run_all_tests(skip_build);
    debug!("Issued: {}", command_line);

    exit_with_status(orchestrator.executor())
}

fn exit_with_status(executor: &CliExecutor) -> Result<()> {
    let code = executor.wait()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
