use anyhow::{Context, Result};
use dotrunner_core::{Executor, services::ShellExecutor};

use crate::display::format_invocation;

/// Executes through the shell, or only prints in dry-run mode.
#[derive(Debug)]
pub enum CliExecutor {
    Shell(ShellExecutor),
    DryRun,
}

impl CliExecutor {
    pub fn new(dry_run: bool) -> Self {
        if dry_run {
            CliExecutor::DryRun
        } else {
            CliExecutor::Shell(ShellExecutor::new())
        }
    }

    /// Waits for spawned commands and returns the first non-zero exit code.
    pub fn wait(&self) -> Result<i32> {
        let CliExecutor::Shell(shell) = self else {
            return Ok(0);
        };

        let statuses = shell.wait_all().context("Failed to wait for test command")?;
        Ok(statuses
            .iter()
            .find(|status| !status.success())
            .map_or(0, |status| status.code().unwrap_or(1)))
    }
}

impl Executor for CliExecutor {
    fn run_in_terminal(&self, command: &str, directory: Option<&str>) {
        match self {
            CliExecutor::Shell(shell) => shell.run_in_terminal(command, directory),
            CliExecutor::DryRun => println!("{}", format_invocation(command, directory)),
        }
    }
}
