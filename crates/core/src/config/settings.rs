use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ConfigurationStore, keys};

/// Toolchain options as stored in `.dotrunner.json`.
///
/// Every field is optional; defaults are applied when a
/// [`ConfigurationView`](super::ConfigurationView) is read, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_project_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_code_lens: Option<bool>,
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".dotrunner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("dotrunner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }
}

impl ConfigurationStore for Settings {
    fn get_bool(&self, key: &str) -> Option<bool> {
        match key {
            keys::BUILD => self.build,
            keys::RESTORE => self.restore,
            keys::SHOW_CODE_LENS => self.show_code_lens,
            _ => None,
        }
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match key {
            keys::TEST_PROJECT_PATH => self.test_project_path.clone(),
            _ => None,
        }
    }
}

/// A store backed by a JSON file that is re-read on every access, so an
/// edit to the file is picked up by the very next invocation.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn current(&self) -> Settings {
        if !self.path.exists() {
            return Settings::default();
        }
        match Settings::load_from_file(&self.path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }
}

impl ConfigurationStore for JsonFileStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.current().get_bool(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.current().get_string(key)
    }
}
