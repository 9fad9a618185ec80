//! Working-directory resolution
//!
//! The directory handed to `dotnet` is the configured `testProjectPath`
//! resolved against the workspace root, or the workspace root itself.

use std::path::{Component, Path, PathBuf};

use super::{ConfigurationStore, keys};
use crate::interfaces::Logger;

/// Resolves the directory that discovery and runs execute in.
pub struct ConfigurationResolver<'a, S: ?Sized> {
    store: &'a S,
    workspace_root: Option<&'a str>,
    logger: &'a dyn Logger,
}

impl<'a, S: ConfigurationStore + ?Sized> ConfigurationResolver<'a, S> {
    pub fn new(store: &'a S, workspace_root: Option<&'a str>, logger: &'a dyn Logger) -> Self {
        Self {
            store,
            workspace_root,
            logger,
        }
    }

    /// Returns the configured test project path, or the workspace root when
    /// none is configured. The workspace root is returned untouched, even
    /// when absent.
    ///
    /// A directory that does not exist is logged and returned anyway;
    /// `dotnet` reports the missing directory itself.
    pub fn resolve_directory(&self) -> Option<String> {
        let configured = self
            .store
            .get_string(keys::TEST_PROJECT_PATH)
            .filter(|path| !path.is_empty());

        let resolved = match configured {
            Some(configured) => {
                let resolved = resolve_path(&configured, self.workspace_root);
                tracing::debug!("Resolved testProjectPath {configured:?} to {resolved:?}");
                resolved
            }
            None => {
                tracing::debug!(
                    "No testProjectPath configured, using workspace root {:?}",
                    self.workspace_root
                );
                self.workspace_root?.to_string()
            }
        };

        if !Path::new(&resolved).exists() {
            self.logger.log(&format!(
                "Path {resolved} is not valid. Please check your testProjectPath setting."
            ));
        }

        Some(resolved)
    }
}

/// Resolves `path` against `base`: a leading `~` expands to `$HOME`,
/// absolute paths are kept, relative paths are joined onto `base`.
/// The result is normalized lexically.
pub fn resolve_path(path: &str, base: Option<&str>) -> String {
    let expanded = expand_home(path);

    let joined = match base {
        Some(base) if expanded.is_relative() => Path::new(base).join(&expanded),
        _ => expanded,
    };

    normalize(&joined).to_string_lossy().into_owned()
}

fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\"))
    };

    match (rest, std::env::var("HOME")) {
        (Some(rest), Ok(home)) => Path::new(&home).join(rest),
        _ => PathBuf::from(path),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            Component::CurDir => {}
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::recording::RecordingLogger;
    use tempfile::TempDir;

    fn settings_with_path(path: &str) -> Settings {
        Settings {
            test_project_path: Some(path.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_falls_back_to_workspace_root_unchanged() {
        let temp = TempDir::new().unwrap();
        let root = format!("{}/./", temp.path().display());
        let logger = RecordingLogger::default();
        let settings = Settings::default();

        let resolver = ConfigurationResolver::new(&settings, Some(&root), &logger);
        assert_eq!(resolver.resolve_directory(), Some(root));
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_missing_workspace_root_is_logged_and_kept() {
        let logger = RecordingLogger::default();
        let settings = Settings::default();
        let root = "/definitely/missing/../missing/root";

        let resolver = ConfigurationResolver::new(&settings, Some(root), &logger);
        assert_eq!(resolver.resolve_directory().as_deref(), Some(root));

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.contains(&format!("{root} is not valid")));
    }

    #[test]
    fn test_empty_path_counts_as_unset() {
        let logger = RecordingLogger::default();
        let settings = settings_with_path("");

        let resolver = ConfigurationResolver::new(&settings, Some("/repo"), &logger);
        assert_eq!(resolver.resolve_directory().as_deref(), Some("/repo"));
    }

    #[test]
    fn test_absent_workspace_root_propagates() {
        let logger = RecordingLogger::default();
        let settings = Settings::default();

        let resolver = ConfigurationResolver::new(&settings, None, &logger);
        assert_eq!(resolver.resolve_directory(), None);
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_relative_path_resolves_against_root() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("tests").join("Unit");
        std::fs::create_dir_all(&project).unwrap();
        let root = temp.path().to_string_lossy().into_owned();

        let logger = RecordingLogger::default();
        let settings = settings_with_path("./tests/Unit");
        let resolver = ConfigurationResolver::new(&settings, Some(&root), &logger);

        assert_eq!(
            resolver.resolve_directory(),
            Some(project.to_string_lossy().into_owned())
        );
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_missing_path_is_logged_and_kept() {
        let logger = RecordingLogger::default();
        let settings = settings_with_path("/definitely/not/here");

        let resolver = ConfigurationResolver::new(&settings, Some("/repo"), &logger);
        assert_eq!(
            resolver.resolve_directory().as_deref(),
            Some("/definitely/not/here")
        );

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.contains("/definitely/not/here is not valid"));
    }

    #[test]
    fn test_resolve_path_normalizes() {
        assert_eq!(resolve_path("../b/./c", Some("/root/a")), "/root/b/c");
        assert_eq!(resolve_path("/abs/x/..", Some("/root")), "/abs");
        assert_eq!(resolve_path("rel", None), "rel");
        assert_eq!(resolve_path("/..", None), "/");
    }

    #[test]
    fn test_resolve_path_expands_home() {
        let Ok(home) = std::env::var("HOME") else {
            return;
        };
        let expected = Path::new(&home).join("projects").join("Api.Tests");
        assert_eq!(
            resolve_path("~/projects/Api.Tests", Some("/repo")),
            normalize(&expected).to_string_lossy()
        );
    }
}
