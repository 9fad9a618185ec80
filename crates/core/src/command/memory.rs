use super::TestCommand;

/// Remembers the last issued command so it can be replayed.
#[derive(Debug, Default)]
pub struct LastCommandMemory {
    last: Option<TestCommand>,
}

impl LastCommandMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an owned copy, replacing any previous entry.
    pub fn record(&mut self, command: &TestCommand) {
        self.last = Some(command.clone());
    }

    pub fn replay(&self) -> Option<&TestCommand> {
        self.last.as_ref()
    }
}
