//! In-memory diagnostic sink for assertions in tests.

use parking_lot::Mutex;

use super::{DiagnosticLogger, LogField, LogLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub fields: Vec<LogField>,
}

impl LogEntry {
    /// Value of the named field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Whether the message or any field value contains `needle`
    pub fn mentions(&self, needle: &str) -> bool {
        self.message.contains(needle) || self.fields.iter().any(|f| f.value.contains(needle))
    }
}

/// Keeps every entry it receives, in order
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn entries_at(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level)
            .cloned()
            .collect()
    }

    pub fn count_at(&self, level: LogLevel) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level)
            .count()
    }

    /// Whether any entry at any level mentions `needle`
    pub fn any_mentions(&self, needle: &str) -> bool {
        self.entries.lock().iter().any(|entry| entry.mentions(needle))
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticLogger for RecordingDiagnostics {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]) {
        self.entries.lock().push(LogEntry {
            level,
            message: message.to_string(),
            fields: fields.to_vec(),
        });
    }
}
