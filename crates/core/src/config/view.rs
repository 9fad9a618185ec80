use super::{ConfigurationStore, keys};

/// Snapshot of the toolchain options that shape a `dotnet test` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationView {
    /// `false` adds `--no-build`.
    pub build: bool,
    /// `false` adds `--no-restore`.
    pub restore: bool,
    pub test_project_path: Option<String>,
    /// Redirect results to a trx file.
    pub results_integration: bool,
}

impl Default for ConfigurationView {
    fn default() -> Self {
        Self {
            build: true,
            restore: true,
            test_project_path: None,
            results_integration: true,
        }
    }
}

impl ConfigurationView {
    /// Reads every option from `store`, falling back to the defaults for absent keys.
    pub fn read(store: &impl ConfigurationStore) -> Self {
        let defaults = Self::default();
        Self {
            build: store.get_bool(keys::BUILD).unwrap_or(defaults.build),
            restore: store.get_bool(keys::RESTORE).unwrap_or(defaults.restore),
            test_project_path: store.get_string(keys::TEST_PROJECT_PATH),
            results_integration: store
                .get_bool(keys::SHOW_CODE_LENS)
                .unwrap_or(defaults.results_integration),
        }
    }
}
