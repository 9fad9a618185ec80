//! Service implementations for the collaborator interfaces
//!
//! This module provides the concrete implementations the CLI wires into the
//! orchestrator: tracing-backed logging, a shell executor, the trx results
//! file, and in-memory recorders for hosts that want to inspect traffic.

pub mod recording;
pub mod results_file;
pub mod shell_executor;
pub mod tracing_logger;

pub use results_file::TrxResultsFile;
pub use shell_executor::ShellExecutor;
pub use tracing_logger::{TracingLogger, TracingMessageDisplay};
