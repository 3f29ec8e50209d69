//! # Diagnostic Logging
//!
//! Logging capability injected into the request path. Production code uses
//! [`TracingDiagnostics`], which forwards every entry to `tracing`; tests use
//! [`RecordingDiagnostics`] to assert on what was logged.

pub mod recording;
pub mod redaction;

use std::fmt;

pub use recording::{LogEntry, RecordingDiagnostics};
pub use redaction::redacted_preview;

/// Severity of a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// A named value attached to a diagnostic entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogField {
    pub name: &'static str,
    pub value: String,
}

impl LogField {
    pub fn new(name: &'static str, value: impl fmt::Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Sink for diagnostic entries
pub trait DiagnosticLogger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]);

    fn debug(&self, message: &str, fields: &[LogField]) {
        self.log(LogLevel::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[LogField]) {
        self.log(LogLevel::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[LogField]) {
        self.log(LogLevel::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[LogField]) {
        self.log(LogLevel::Error, message, fields);
    }
}

/// Forwards diagnostic entries to the global `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticLogger for TracingDiagnostics {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]) {
        let fields = FieldList(fields);
        match level {
            LogLevel::Debug => tracing::debug!(fields = %fields, "{message}"),
            LogLevel::Info => tracing::info!(fields = %fields, "{message}"),
            LogLevel::Warn => tracing::warn!(fields = %fields, "{message}"),
            LogLevel::Error => tracing::error!(fields = %fields, "{message}"),
        }
    }
}

/// Renders fields as `name=value` pairs, only when the event is enabled
struct FieldList<'a>(&'a [LogField]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", field.name, field.value)?;
        }
        Ok(())
    }
}
