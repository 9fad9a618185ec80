use std::rc::Rc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;

use super::executor::CliExecutor;
use crate::cli::GlobalArgs;
use crate::display::{format_run_started, format_test_names};
use crate::utils::{SessionCommand, Workspace, parse_session_line};

const HELP: &str = "\
Commands:
  discover              list tests (runs in the background)
  run <name>            run one test by fully qualified name
  run-all               run every test
  rerun                 run the last command again
  quit                  leave the session
Append --skip-build to run or run-all to pass --no-build.";

/// Reads commands from stdin until `quit` or end of input.
///
/// Discovery is spawned on the local set and does not block the prompt, so
/// runs and reruns can be issued while it is still going.
pub async fn session_command(global: &GlobalArgs, dry_run: bool) -> Result<()> {
    let workspace = Workspace::from_args(global)?;
    let orchestrator = Rc::new(workspace.orchestrator(global, CliExecutor::new(dry_run)));

    orchestrator
        .on_test_run()
        .subscribe(|name: &String| eprintln!("{}", format_run_started(name)));
    orchestrator
        .on_new_test_results()
        .subscribe(|names: &Vec<String>| println!("{}", format_test_names(names)));

    let local = LocalSet::new();
    local
        .run_until(async {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut discoveries = Vec::new();

            while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
                match parse_session_line(&line) {
                    SessionCommand::Discover => {
                        let orchestrator = Rc::clone(&orchestrator);
                        discoveries.push(tokio::task::spawn_local(async move {
                            orchestrator.discover_tests().await;
                        }));
                    }
                    SessionCommand::Run { name, skip_build } => {
                        orchestrator.run_test_by_name(&name, skip_build);
                    }
                    SessionCommand::RunAll { skip_build } => {
                        orchestrator.run_all_tests(skip_build);
                    }
                    SessionCommand::Rerun => {
                        if orchestrator.rerun_last_command().is_none() {
                            eprintln!("Nothing to rerun yet");
                        }
                    }
                    SessionCommand::Help => println!("{HELP}"),
                    SessionCommand::Quit => break,
                    SessionCommand::Empty => {}
                    SessionCommand::Invalid(line) => {
                        eprintln!("❌ Unknown command: {line} (try `help`)");
                    }
                }
            }

            for discovery in discoveries {
                discovery.await.context("Discovery task failed")?;
            }
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    let code = orchestrator.executor().wait()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
