//! Command assembly for `dotnet test` invocations

pub mod builder;
pub mod memory;

pub use builder::{CommandBuilder, DEFAULT_BASE_COMMAND};
pub use memory::LastCommandMemory;

/// A requested test invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCommand {
    /// Fully qualified name to filter on. Empty runs every test.
    pub test_name: String,
    /// Append `--no-build` regardless of configuration.
    pub skip_build: bool,
}

impl TestCommand {
    pub fn new(test_name: impl Into<String>, skip_build: bool) -> Self {
        Self {
            test_name: test_name.into(),
            skip_build,
        }
    }

    /// A command without a filter.
    pub fn all(skip_build: bool) -> Self {
        Self::new(String::new(), skip_build)
    }

    pub fn has_filter(&self) -> bool {
        !self.test_name.is_empty()
    }
}
