pub mod formatter;

use dotrunner_core::{MessageDisplay, WarningMessage};

pub use formatter::{format_invocation, format_run_started, format_test_names};

/// Prints warnings to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDisplay;

impl MessageDisplay for ConsoleDisplay {
    fn show_warning(&self, message: &WarningMessage) {
        eprintln!("⚠️  {}", message.text);
    }
}
