//! dotrunner - discover and run dotnet tests
//!
//! This package re-exports the orchestration core so the integration tests
//! under `tests/` exercise the public API the CLI is built on.
pub use dotrunner_core::*;
