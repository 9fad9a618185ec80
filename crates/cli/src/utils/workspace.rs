use std::path::PathBuf;

use anyhow::{Context, Result};
use dotrunner_core::{
    DotnetDiscoverer, Executor, JsonFileStore, Orchestrator, Settings,
    services::TrxResultsFile,
};

use crate::cli::GlobalArgs;
use crate::display::ConsoleDisplay;

pub type CliOrchestrator<E> = Orchestrator<JsonFileStore, E, DotnetDiscoverer>;

/// The workspace root and configuration file a command operates on.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config_path: PathBuf,
}

impl Workspace {
    pub fn from_args(global: &GlobalArgs) -> Result<Self> {
        let root = match &global.workspace {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let config_path = global
            .config
            .clone()
            .or_else(|| Settings::find_config_file(&root))
            .unwrap_or_else(|| root.join(".dotrunner.json"));

        tracing::debug!(
            "Workspace root {}, configuration {}",
            root.display(),
            config_path.display()
        );
        Ok(Self { root, config_path })
    }

    pub fn orchestrator<E: Executor>(&self, global: &GlobalArgs, executor: E) -> CliOrchestrator<E> {
        let results_file = global
            .results_file
            .clone()
            .map(TrxResultsFile::new)
            .unwrap_or_default();

        Orchestrator::new(
            JsonFileStore::new(&self.config_path),
            executor,
            DotnetDiscoverer::with_executable(dotnet_executable(&global.base_command)),
            Some(self.root.to_string_lossy().into_owned()),
        )
        .with_base_command(global.base_command.clone())
        .with_results_file(results_file)
        .with_message_display(ConsoleDisplay)
    }
}

/// The program part of the base command, used for discovery.
fn dotnet_executable(base_command: &str) -> &str {
    base_command.split_whitespace().next().unwrap_or("dotnet")
}
