//! Entry points for running and discovering tests
//!
//! Every request resolves the working directory and reads configuration
//! afresh. Run requests build a command, remember it, announce it on the
//! run-started stream and hand it to the executor without waiting. Discovery
//! requests are awaited and always end in one publish on the discovery stream.

use std::cell::RefCell;

use crate::{
    command::{CommandBuilder, DEFAULT_BASE_COMMAND, LastCommandMemory, TestCommand},
    config::{ConfigurationResolver, ConfigurationStore, ConfigurationView},
    discovery::DiscoveryCoordinator,
    interfaces::{Discoverer, Executor, Logger, MessageDisplay, ResultsFile},
    notify::{EventStream, NotificationHub},
    services::{TracingLogger, TracingMessageDisplay, TrxResultsFile},
};

/// Coordinates test runs and discovery for one workspace.
///
/// Not `Send`: drive it from a single thread (e.g. a tokio current-thread
/// runtime or a `LocalSet`).
pub struct Orchestrator<S, E, D> {
    store: S,
    executor: E,
    discoverer: D,
    workspace_root: Option<String>,
    base_command: String,
    results_file: Box<dyn ResultsFile>,
    logger: Box<dyn Logger>,
    display: Box<dyn MessageDisplay>,
    memory: RefCell<LastCommandMemory>,
    hub: NotificationHub,
}

impl<S, E, D> Orchestrator<S, E, D>
where
    S: ConfigurationStore,
    E: Executor,
    D: Discoverer,
{
    pub fn new(store: S, executor: E, discoverer: D, workspace_root: Option<String>) -> Self {
        Self {
            store,
            executor,
            discoverer,
            workspace_root,
            base_command: DEFAULT_BASE_COMMAND.to_string(),
            results_file: Box::new(TrxResultsFile::default()),
            logger: Box::new(TracingLogger),
            display: Box::new(TracingMessageDisplay),
            memory: RefCell::new(LastCommandMemory::new()),
            hub: NotificationHub::new(),
        }
    }

    pub fn with_base_command(mut self, base_command: impl Into<String>) -> Self {
        self.base_command = base_command.into();
        self
    }

    pub fn with_results_file(mut self, results_file: impl ResultsFile + 'static) -> Self {
        self.results_file = Box::new(results_file);
        self
    }

    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    pub fn with_message_display(mut self, display: impl MessageDisplay + 'static) -> Self {
        self.display = Box::new(display);
        self
    }

    /// Fires once per completed discovery with the discovered test names.
    pub fn on_new_test_results(&self) -> &EventStream<Vec<String>> {
        &self.hub.discovery_results
    }

    /// Fires when a run is issued, before the executor is invoked.
    pub fn on_test_run(&self) -> &EventStream<String> {
        &self.hub.test_runs
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn last_command(&self) -> Option<TestCommand> {
        self.memory.borrow().replay().cloned()
    }

    pub fn resolve_directory(&self) -> Option<String> {
        ConfigurationResolver::new(
            &self.store,
            self.workspace_root.as_deref(),
            self.logger.as_ref(),
        )
        .resolve_directory()
    }

    /// Builds the command line for `command` against the current configuration
    /// without running it or touching the last-command memory.
    pub fn build_command(&self, command: &TestCommand) -> String {
        let options = ConfigurationView::read(&self.store);
        CommandBuilder::build(
            &self.base_command,
            command,
            &options,
            self.results_file.as_ref(),
        )
    }

    pub fn run_all_tests(&self, skip_build: bool) -> String {
        tracing::info!(target: "dotrunner::usage", tag = "runAllTests");
        self.run_test(&TestCommand::all(skip_build))
    }

    pub fn run_test_by_name(&self, test_name: &str, skip_build: bool) -> String {
        self.run_test(&TestCommand::new(test_name, skip_build))
    }

    /// Issues `command` and returns the command line handed to the executor.
    pub fn run_test(&self, command: &TestCommand) -> String {
        let directory = self.resolve_directory();
        let command_line = self.build_command(command);

        self.memory.borrow_mut().record(command);
        self.hub.test_runs.publish(&command.test_name);

        self.executor
            .run_in_terminal(&command_line, directory.as_deref());
        command_line
    }

    /// Replays the last issued command. `None` if nothing has run yet.
    pub fn rerun_last_command(&self) -> Option<String> {
        let Some(command) = self.last_command() else {
            tracing::debug!("No command to rerun");
            return None;
        };
        Some(self.run_test(&command))
    }

    pub async fn discover_tests(&self) {
        let directory = self.resolve_directory();
        let options = ConfigurationView::read(&self.store);

        DiscoveryCoordinator::new(
            self.logger.as_ref(),
            self.display.as_ref(),
            &self.hub.discovery_results,
        )
        .discover(
            &self.discoverer,
            directory.as_deref(),
            &CommandBuilder::test_options(&options),
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Settings,
        discovery::{DiscoveryResult, WarningMessage},
        error::{Error, Result},
        services::recording::{LogLevel, RecordingDisplay, RecordingExecutor, RecordingLogger},
    };
    use std::rc::Rc;

    /// Returns a fresh copy of a canned outcome on every call.
    struct StubDiscoverer {
        outcome: fn() -> Result<DiscoveryResult>,
        calls: RefCell<Vec<(Option<String>, String)>>,
    }

    impl StubDiscoverer {
        fn new(outcome: fn() -> Result<DiscoveryResult>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Discoverer for StubDiscoverer {
        async fn discover_tests(&self, directory: Option<&str>, options: &str) -> Result<DiscoveryResult> {
            self.calls
                .borrow_mut()
                .push((directory.map(str::to_string), options.to_string()));
            (self.outcome)()
        }
    }

    type TestOrchestrator = Orchestrator<Rc<RefCell<Settings>>, RecordingExecutor, StubDiscoverer>;

    struct Fixture {
        settings: Rc<RefCell<Settings>>,
        executor: RecordingExecutor,
        logger: RecordingLogger,
        display: RecordingDisplay,
        orchestrator: TestOrchestrator,
    }

    fn fixture(outcome: fn() -> Result<DiscoveryResult>) -> Fixture {
        let settings = Rc::new(RefCell::new(Settings {
            show_code_lens: Some(false),
            ..Default::default()
        }));
        let executor = RecordingExecutor::default();
        let logger = RecordingLogger::default();
        let display = RecordingDisplay::default();
        let orchestrator = Orchestrator::new(
            Rc::clone(&settings),
            executor.clone(),
            StubDiscoverer::new(outcome),
            Some("/repo".to_string()),
        )
        .with_logger(logger.clone())
        .with_message_display(display.clone());

        Fixture {
            settings,
            executor,
            logger,
            display,
            orchestrator,
        }
    }

    fn no_tests() -> Result<DiscoveryResult> {
        Ok(DiscoveryResult::default())
    }

    fn collect<T: Clone + 'static>(stream: &EventStream<T>) -> Rc<RefCell<Vec<T>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        stream.subscribe(move |value: &T| sink.borrow_mut().push(value.clone()));
        seen
    }

    #[test]
    fn test_run_test_invokes_executor_in_workspace_root() {
        let f = fixture(no_tests);
        let command_line = f.orchestrator.run_test_by_name("Api.Tests.Creates", false);

        assert_eq!(command_line, "dotnet test --filter FullyQualifiedName~Api.Tests.Creates");
        let invocations = f.executor.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].command, command_line);
        assert_eq!(invocations[0].directory.as_deref(), Some("/repo"));
    }

    #[test]
    fn test_run_all_has_no_filter_and_announces_empty_name() {
        let f = fixture(no_tests);
        let runs = collect(f.orchestrator.on_test_run());

        let command_line = f.orchestrator.run_all_tests(true);

        assert_eq!(command_line, "dotnet test --no-build");
        assert_eq!(*runs.borrow(), vec![String::new()]);
        assert_eq!(f.orchestrator.last_command(), Some(TestCommand::all(true)));
    }

    #[test]
    fn test_run_started_fires_before_executor() {
        let f = fixture(no_tests);
        let executor = f.executor.clone();
        let invocations_at_publish = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&invocations_at_publish);
        f.orchestrator.on_test_run().subscribe(move |_: &String| {
            *sink.borrow_mut() = Some(executor.invocations().len());
        });

        f.orchestrator.run_test_by_name("A", false);
        assert_eq!(*invocations_at_publish.borrow(), Some(0));
    }

    #[test]
    fn test_rerun_before_any_run_is_a_no_op() {
        let f = fixture(no_tests);
        let runs = collect(f.orchestrator.on_test_run());

        assert_eq!(f.orchestrator.rerun_last_command(), None);
        assert!(f.executor.invocations().is_empty());
        assert!(runs.borrow().is_empty());
    }

    #[test]
    fn test_rerun_replays_identical_command() {
        let f = fixture(no_tests);
        let runs = collect(f.orchestrator.on_test_run());

        let first = f.orchestrator.run_test(&TestCommand::new("A", false));
        let second = f.orchestrator.rerun_last_command();

        assert_eq!(second.as_deref(), Some(first.as_str()));
        assert_eq!(f.executor.commands(), vec![first.clone(), first]);
        assert_eq!(*runs.borrow(), vec!["A".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_rerun_replays_only_the_latest() {
        let f = fixture(no_tests);
        f.orchestrator.run_test_by_name("A", false);
        f.orchestrator.run_test_by_name("B(1)", true);

        assert_eq!(
            f.orchestrator.rerun_last_command().as_deref(),
            Some("dotnet test --filter FullyQualifiedName~B --no-build")
        );
    }

    #[test]
    fn test_configuration_change_applies_to_next_run() {
        let f = fixture(no_tests);
        let before = f.orchestrator.run_all_tests(false);

        f.settings.borrow_mut().restore = Some(false);
        let after = f.orchestrator.rerun_last_command().unwrap();

        assert_eq!(before, "dotnet test");
        assert_eq!(after, "dotnet test --no-restore");
    }

    #[test]
    fn test_results_clause_uses_results_file() {
        let f = fixture(no_tests);
        f.settings.borrow_mut().show_code_lens = None;
        let orchestrator = f
            .orchestrator
            .with_results_file(TrxResultsFile::new("/out/Results.trx"));

        assert_eq!(
            orchestrator.run_all_tests(false),
            "dotnet test --logger \"trx;LogFileName=/out/Results.trx\""
        );
    }

    #[test]
    fn test_configured_project_path_is_used_for_runs() {
        let f = fixture(no_tests);
        f.settings.borrow_mut().test_project_path = Some("tests/Api.Tests".to_string());

        f.orchestrator.run_all_tests(false);

        assert_eq!(
            f.executor.invocations()[0].directory.as_deref(),
            Some("/repo/tests/Api.Tests")
        );
        // The path does not exist, which is logged but not fatal.
        assert_eq!(f.logger.count(LogLevel::Info), 1);
    }

    #[test]
    fn test_orchestrators_do_not_share_memory() {
        let a = fixture(no_tests);
        let b = fixture(no_tests);
        a.orchestrator.run_test_by_name("A", false);

        assert_eq!(b.orchestrator.rerun_last_command(), None);
    }

    #[tokio::test]
    async fn test_discovery_passes_directory_and_options() {
        let f = fixture(no_tests);
        {
            let mut settings = f.settings.borrow_mut();
            settings.build = Some(false);
            settings.restore = Some(false);
        }

        f.orchestrator.discover_tests().await;

        let calls = f.orchestrator.discoverer.calls.borrow();
        assert_eq!(
            *calls,
            vec![(Some("/repo".to_string()), " --no-build --no-restore".to_string())]
        );
    }

    #[tokio::test]
    async fn test_discovery_failure_publishes_empty_once() {
        let f = fixture(|| Err(Error::DiscoveryError("dotnet not found".into())));
        let results = collect(f.orchestrator.on_new_test_results());

        f.orchestrator.discover_tests().await;

        assert_eq!(*results.borrow(), vec![Vec::<String>::new()]);
        assert_eq!(f.logger.count(LogLevel::Error), 1);
        assert!(f.display.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_discovery_warning_is_logged_displayed_and_published() {
        let f = fixture(|| {
            Ok(DiscoveryResult::new(vec!["T1".into(), "T2".into()])
                .with_warning(WarningMessage::new("w")))
        });
        let results = collect(f.orchestrator.on_new_test_results());

        f.orchestrator.discover_tests().await;

        assert_eq!(f.logger.count(LogLevel::Warning), 1);
        assert_eq!(f.display.warnings().len(), 1);
        assert_eq!(
            *results.borrow(),
            vec![vec!["T1".to_string(), "T2".to_string()]]
        );
    }

    #[tokio::test]
    async fn test_runs_do_not_fire_discovery_stream() {
        let f = fixture(no_tests);
        let results = collect(f.orchestrator.on_new_test_results());

        f.orchestrator.run_all_tests(false);
        assert!(results.borrow().is_empty());

        f.orchestrator.discover_tests().await;
        assert_eq!(results.borrow().len(), 1);
    }
}
