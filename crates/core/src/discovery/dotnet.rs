//! Discovery through the `dotnet` CLI
//!
//! `dotnet test -t` lists test names, but some adapters (xunit) print bare
//! method names. When that happens the assemblies are listed again with
//! `dotnet vstest /ListFullyQualifiedTests` to get filterable names.

use std::path::Path;
use std::process::Output;
use std::sync::LazyLock;

use regex::Regex;
use tokio::process::Command;

use super::{DiscoveryResult, WarningMessage};
use crate::{
    error::{Error, Result},
    interfaces::Discoverer,
};

pub const FQN_NOT_SUPPORTED: &str = "DOTNET_SDK_FQN_NOT_SUPPORTED";

const FQN_NOT_SUPPORTED_TEXT: &str =
    "dotnet sdk >=2.1.2 required to retrieve fully qualified test names. Returning non FQ test names.";

static TEST_RUN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^Test run for (.+\.dll)\(.+\)").expect("test run pattern is valid")
});

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("line break pattern is valid"));

/// Lists tests by shelling out to `dotnet`.
#[derive(Debug, Clone)]
pub struct DotnetDiscoverer {
    dotnet: String,
}

impl DotnetDiscoverer {
    pub fn new() -> Self {
        Self::with_executable("dotnet")
    }

    pub fn with_executable(dotnet: impl Into<String>) -> Self {
        Self {
            dotnet: dotnet.into(),
        }
    }

    async fn run(&self, args: &[String], directory: Option<&str>) -> Result<Output> {
        let rendered = format!("{} {}", self.dotnet, args.join(" "));
        tracing::info!("Executing {} in {:?}", rendered, directory);

        let mut cmd = Command::new(&self.dotnet);
        cmd.args(args);
        if let Some(dir) = directory {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(Error::CommandFailed {
                command: rendered,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    async fn list_tests(&self, directory: Option<&str>, options: &str) -> Result<String> {
        let mut args = vec!["test".to_string(), "-t".to_string(), "-v=q".to_string()];
        args.extend(options.split_whitespace().map(String::from));

        let output = self.run(&args, directory).await?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Returns `Ok(None)` when the SDK does not know `/ListFullyQualifiedTests`.
    async fn list_fully_qualified(
        &self,
        assemblies: &[String],
        directory: Option<&str>,
    ) -> Result<Option<Vec<String>>> {
        let target_dir = tempfile::tempdir()?;
        let target = target_dir.path().join("test-names.txt");

        let mut args = vec!["vstest".to_string()];
        args.extend(assemblies.iter().cloned());
        args.push("/ListFullyQualifiedTests".to_string());
        args.push(format!("/ListTestsTargetPath:{}", target.display()));

        match self.run(&args, directory).await {
            Ok(_) => read_test_names(&target).map(Some),
            Err(Error::CommandFailed { stderr, .. }) if stderr.contains("ListFullyQualifiedTests") => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for DotnetDiscoverer {
    fn default() -> Self {
        Self::new()
    }
}

impl Discoverer for DotnetDiscoverer {
    async fn discover_tests(&self, directory: Option<&str>, options: &str) -> Result<DiscoveryResult> {
        let stdout = self.list_tests(directory, options).await?;
        let test_names = extract_test_names(&stdout);

        if !is_missing_fq_names(&test_names) {
            return Ok(DiscoveryResult::new(test_names));
        }

        let assemblies = extract_assembly_paths(&stdout);
        if assemblies.is_empty() {
            return Err(Error::DiscoveryError(format!(
                "Couldn't extract assembly paths from dotnet test output: {stdout}"
            )));
        }

        match self.list_fully_qualified(&assemblies, directory).await? {
            Some(names) => Ok(DiscoveryResult::new(names)),
            None => Ok(DiscoveryResult::new(test_names)
                .with_warning(WarningMessage::new(FQN_NOT_SUPPORTED_TEXT).with_kind(FQN_NOT_SUPPORTED))),
        }
    }
}

/// Test names are the lines indented by four spaces, sorted.
pub fn extract_test_names(stdout: &str) -> Vec<String> {
    let mut lines: Vec<&str> = LINE_BREAKS
        .split(stdout)
        .filter(|line| line.starts_with("    "))
        .collect();
    lines.sort_unstable();
    lines.into_iter().map(|line| line.trim().to_string()).collect()
}

pub fn extract_assembly_paths(stdout: &str) -> Vec<String> {
    TEST_RUN_LINE
        .captures_iter(stdout)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// A name without a `.` is a bare method name rather than `Namespace.Class.Method`.
pub fn is_missing_fq_names(test_names: &[String]) -> bool {
    test_names.iter().any(|name| !name.contains('.'))
}

fn read_test_names(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
