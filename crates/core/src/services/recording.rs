//! In-memory collaborators that record what the core asked of them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    discovery::WarningMessage,
    error::Error,
    interfaces::{Executor, Logger, MessageDisplay},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Rendered cause, for error entries.
    pub cause: Option<String>,
}

/// Logger that keeps every entry. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingLogger {
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == level)
            .count()
    }

    fn push(&self, level: LogLevel, message: &str, cause: Option<String>) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            message: message.to_string(),
            cause,
        });
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.push(LogLevel::Info, message, None);
    }

    fn log_warning(&self, message: &str) {
        self.push(LogLevel::Warning, message, None);
    }

    fn log_error(&self, message: &str, cause: &Error) {
        self.push(LogLevel::Error, message, Some(cause.to_string()));
    }
}

/// Message display that keeps every warning shown. Clones share state.
#[derive(Debug, Default, Clone)]
pub struct RecordingDisplay {
    warnings: Rc<RefCell<Vec<WarningMessage>>>,
}

impl RecordingDisplay {
    pub fn warnings(&self) -> Vec<WarningMessage> {
        self.warnings.borrow().clone()
    }
}

impl MessageDisplay for RecordingDisplay {
    fn show_warning(&self, message: &WarningMessage) {
        self.warnings.borrow_mut().push(message.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub directory: Option<String>,
}

/// Executor that records invocations instead of running them. Clones share state.
#[derive(Debug, Default, Clone)]
pub struct RecordingExecutor {
    invocations: Rc<RefCell<Vec<Invocation>>>,
}

impl RecordingExecutor {
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|invocation| invocation.command.clone())
            .collect()
    }
}

impl Executor for RecordingExecutor {
    fn run_in_terminal(&self, command: &str, directory: Option<&str>) {
        self.invocations.borrow_mut().push(Invocation {
            command: command.to_string(),
            directory: directory.map(str::to_string),
        });
    }
}
