//! Test discovery: the result model, the coordinator that publishes it, and
//! the `dotnet` discoverer.

pub mod coordinator;
pub mod dotnet;

pub use coordinator::DiscoveryCoordinator;
pub use dotnet::DotnetDiscoverer;

/// A non-fatal problem reported alongside discovered tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningMessage {
    pub text: String,
    /// Machine-readable tag, e.g. `DOTNET_SDK_FQN_NOT_SUPPORTED`.
    pub kind: Option<String>,
}

impl WarningMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryResult {
    pub test_names: Vec<String>,
    pub warning_message: Option<WarningMessage>,
}

impl DiscoveryResult {
    pub fn new(test_names: Vec<String>) -> Self {
        Self {
            test_names,
            warning_message: None,
        }
    }

    pub fn with_warning(mut self, warning: WarningMessage) -> Self {
        self.warning_message = Some(warning);
        self
    }
}
