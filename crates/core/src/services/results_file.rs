use std::path::{Path, PathBuf};

use crate::interfaces::ResultsFile;

/// Default name of the trx file inside the results folder.
pub const RESULTS_FILE_NAME: &str = "Results.trx";

/// A trx results file at a fixed location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrxResultsFile {
    path: PathBuf,
}

impl TrxResultsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `Results.trx` inside `<tmp>/dotrunner`.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("dotrunner").join(RESULTS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TrxResultsFile {
    fn default() -> Self {
        Self::in_temp_dir()
    }
}

impl ResultsFile for TrxResultsFile {
    fn file_name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
