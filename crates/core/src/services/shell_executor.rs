use std::cell::RefCell;
use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::interfaces::Executor;

/// Runs commands through the platform shell. Output is inherited, stdin is not.
///
/// Running children are kept so a front end can [`wait_all`](Self::wait_all)
/// before it exits; the orchestrator itself never waits. Finished children
/// are reaped on the next spawn and their failures kept for `wait_all`.
#[derive(Debug, Default)]
pub struct ShellExecutor {
    children: RefCell<Vec<Child>>,
    failures: RefCell<Vec<ExitStatus>>,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }

    /// Drops children that have exited, keeping failed exit statuses.
    fn reap(&self) {
        let mut failures = self.failures.borrow_mut();
        self.children
            .borrow_mut()
            .retain_mut(|child| match child.try_wait() {
                Ok(Some(status)) => {
                    if !status.success() {
                        failures.push(status);
                    }
                    false
                }
                Ok(None) => true,
                Err(e) => {
                    tracing::warn!("Failed to poll child {}: {}", child.id(), e);
                    true
                }
            });
    }

    pub fn spawn(&self, command: &str, directory: Option<&str>) -> io::Result<()> {
        self.reap();

        let mut cmd = Self::shell_command(command);
        cmd.stdin(Stdio::null());

        // Set working directory if specified
        if let Some(dir) = directory {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn()?;
        self.children.borrow_mut().push(child);
        Ok(())
    }

    /// Number of spawned commands still running.
    pub fn pending(&self) -> usize {
        self.reap();
        self.children.borrow().len()
    }

    /// Waits for every running command. Returns the failures of already
    /// reaped commands first, then the status of each waited command in
    /// spawn order.
    pub fn wait_all(&self) -> io::Result<Vec<ExitStatus>> {
        let mut statuses = std::mem::take(&mut *self.failures.borrow_mut());
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for mut child in children {
            statuses.push(child.wait()?);
        }
        Ok(statuses)
    }
}

impl Executor for ShellExecutor {
    fn run_in_terminal(&self, command: &str, directory: Option<&str>) {
        tracing::info!("Running: {}", command);
        if let Some(dir) = directory {
            tracing::info!("Working directory: {}", dir);
        }

        if let Err(e) = self.spawn(command, directory) {
            tracing::error!("Failed to execute {}: {}", command, e);
        }
    }
}
