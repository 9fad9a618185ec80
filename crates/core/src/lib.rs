//! dotrunner - test command orchestration for `dotnet test`
//!
//! This crate provides functionality to:
//! - Build `dotnet test` command lines from configuration and a test filter
//! - Remember the last run so it can be replayed
//! - Discover tests and publish the results to subscribers
//! - Resolve the project directory commands run in
pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod interfaces;
pub mod notify;
pub mod orchestrator;
pub mod services;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::{CommandBuilder, TestCommand};
pub use config::{ConfigurationStore, ConfigurationView, JsonFileStore, Settings};
pub use discovery::{DiscoveryResult, DotnetDiscoverer, WarningMessage};
pub use interfaces::{Discoverer, Executor, Logger, MessageDisplay, ResultsFile};
pub use notify::{EventStream, NotificationHub, SubscriptionId};
pub use orchestrator::Orchestrator;
