//! Collaborator interfaces
//!
//! The orchestration core never touches a terminal, a process, or the user
//! directly. Everything outside the core is reached through these traits so
//! a front end (the CLI, an editor host, a test) can supply its own.

use std::future::Future;

use crate::{discovery::DiscoveryResult, discovery::WarningMessage, error::Error, error::Result};

/// Runs an assembled command line. Fire-and-forget: nothing is returned and
/// the core never waits for completion.
pub trait Executor {
    fn run_in_terminal(&self, command: &str, directory: Option<&str>);
}

/// Enumerates the tests of a project without running them.
pub trait Discoverer {
    /// `options` is the same build/restore suffix run commands use, e.g. `" --no-build"`.
    fn discover_tests(
        &self,
        directory: Option<&str>,
        options: &str,
    ) -> impl Future<Output = Result<DiscoveryResult>>;
}

/// Diagnostic output channel.
pub trait Logger {
    fn log(&self, message: &str);

    fn log_warning(&self, message: &str);

    fn log_error(&self, message: &str, cause: &Error);
}

/// Surfaces a warning to the user.
pub trait MessageDisplay {
    fn show_warning(&self, message: &WarningMessage);
}

/// The file test results are redirected to.
pub trait ResultsFile {
    fn file_name(&self) -> String;
}

impl<E: Executor + ?Sized> Executor for &E {
    fn run_in_terminal(&self, command: &str, directory: Option<&str>) {
        (**self).run_in_terminal(command, directory);
    }
}

impl<D: Discoverer> Discoverer for &D {
    fn discover_tests(
        &self,
        directory: Option<&str>,
        options: &str,
    ) -> impl Future<Output = Result<DiscoveryResult>> {
        (**self).discover_tests(directory, options)
    }
}
