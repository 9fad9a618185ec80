use anyhow::Result;

use super::executor::CliExecutor;
use crate::cli::GlobalArgs;
use crate::display::format_test_names;
use crate::utils::Workspace;

pub async fn discover_command(global: &GlobalArgs) -> Result<()> {
    let workspace = Workspace::from_args(global)?;
    let orchestrator = workspace.orchestrator(global, CliExecutor::DryRun);

    orchestrator
        .on_new_test_results()
        .subscribe(|names: &Vec<String>| println!("{}", format_test_names(names)));

    orchestrator.discover_tests().await;
    Ok(())
}
