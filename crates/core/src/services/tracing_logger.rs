use crate::{
    discovery::WarningMessage,
    error::Error,
    interfaces::{Logger, MessageDisplay},
};

/// Logger that forwards to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn log_warning(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn log_error(&self, message: &str, cause: &Error) {
        tracing::error!(error = %cause, "{message}");
    }
}

/// Message display that reports warnings as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMessageDisplay;

impl MessageDisplay for TracingMessageDisplay {
    fn show_warning(&self, message: &WarningMessage) {
        tracing::warn!(kind = ?message.kind, "{}", message.text);
    }
}
