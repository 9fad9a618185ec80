//! Configuration management for dotrunner

pub mod resolver;
mod settings;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

// Re-export main types
pub use resolver::{ConfigurationResolver, resolve_path};
pub use settings::{JsonFileStore, Settings};
pub use view::ConfigurationView;

/// Option names understood by a [`ConfigurationStore`].
pub mod keys {
    pub const BUILD: &str = "build";
    pub const RESTORE: &str = "restore";
    pub const TEST_PROJECT_PATH: &str = "testProjectPath";
    pub const SHOW_CODE_LENS: &str = "showCodeLens";
}

/// Read access to named configuration options.
///
/// An absent key is `None`; callers apply their own defaults.
pub trait ConfigurationStore {
    fn get_bool(&self, key: &str) -> Option<bool>;

    fn get_string(&self, key: &str) -> Option<String>;
}

impl<S: ConfigurationStore + ?Sized> ConfigurationStore for &S {
    fn get_bool(&self, key: &str) -> Option<bool> {
        (**self).get_bool(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}

impl<S: ConfigurationStore + ?Sized> ConfigurationStore for Rc<S> {
    fn get_bool(&self, key: &str) -> Option<bool> {
        (**self).get_bool(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}

impl<S: ConfigurationStore> ConfigurationStore for RefCell<S> {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.borrow().get_bool(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.borrow().get_string(key)
    }
}
