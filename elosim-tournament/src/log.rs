//! Log sink injected into the tournament
//!
//! The tournament never touches a global logger directly. Callers hand it a
//! `MatchLog` and keep ownership of it.

use std::cell::RefCell;

use tracing::Level;

/// Leveled message sink used by the tournament and its report
pub trait MatchLog {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
}

/// Forwards records to the `tracing` subscriber installed by the binary
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl MatchLog for TracingLog {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Keeps every record in memory
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: RefCell<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in emission order
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    /// Messages logged at `level`
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    fn push(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}

impl MatchLog for MemoryLog {
    fn debug(&self, message: &str) {
        self.push(Level::DEBUG, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::INFO, message);
    }
}
