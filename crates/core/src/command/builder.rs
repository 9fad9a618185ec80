//! Invocation-string assembly
//!
//! The produced string follows a fixed grammar that downstream scripts scrape:
//!
//! ```text
//! <base>[ --no-build][ --no-restore][ --logger "trx;LogFileName=<file>"][ --filter FullyQualifiedName~<name>][ --no-build]
//! ```
//!
//! Every clause carries its own leading space and appears in this order.

use std::sync::LazyLock;

use regex::Regex;

use super::TestCommand;
use crate::{config::ConfigurationView, interfaces::ResultsFile};

pub const DEFAULT_BASE_COMMAND: &str = "dotnet test";

/// Everything from the first `(` to the last `)`. Greedy on purpose: it
/// strips whole parameter lists such as `Foo(1, (2, 3))`.
static PARAMETER_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*\)").expect("parameter list pattern is valid"));

/// Assembles `dotnet test` command lines.
pub struct CommandBuilder;

impl CommandBuilder {
    pub fn build(
        base: &str,
        command: &TestCommand,
        options: &ConfigurationView,
        results_file: &dyn ResultsFile,
    ) -> String {
        let mut cmd = String::from(base);

        cmd.push_str(&Self::test_options(options));

        if options.results_integration {
            cmd.push_str(&format!(
                " --logger \"trx;LogFileName={}\"",
                results_file.file_name()
            ));
        }

        if command.has_filter() {
            cmd.push_str(" --filter FullyQualifiedName~");
            cmd.push_str(&Self::filter_target(&command.test_name));
        }

        if command.skip_build {
            cmd.push_str(" --no-build");
        }

        tracing::debug!("Assembled command: {}", cmd);
        cmd
    }

    /// The build/restore suffix shared by run and discovery invocations.
    pub fn test_options(options: &ConfigurationView) -> String {
        let mut suffix = String::new();
        if !options.build {
            suffix.push_str(" --no-build");
        }
        if !options.restore {
            suffix.push_str(" --no-restore");
        }
        suffix
    }

    /// Strips a parameterized display name down to something `--filter` accepts.
    pub fn filter_target(test_name: &str) -> String {
        PARAMETER_LIST.replace_all(test_name, "").into_owned()
    }
}
