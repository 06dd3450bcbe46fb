//! Log sink that keeps lines in memory for assertions.

use crate::agent::ports::ServiceLogger;
use std::sync::{Arc, RwLock};

/// Severity of a recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message.
    Info,
    /// Warning.
    Warn,
}

/// One captured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLine {
    /// Severity.
    pub level: LogLevel,
    /// Rendered message.
    pub message: String,
}

/// Thread-safe recording logger.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<RwLock<Vec<RecordedLine>>>,
}

impl RecordingLogger {
    /// Creates an empty recording logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every captured line in emission order.
    ///
    /// A poisoned lock yields an empty snapshot.
    #[must_use]
    pub fn lines(&self) -> Vec<RecordedLine> {
        self.lines
            .read()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Returns captured messages at `level`.
    #[must_use]
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.level == level)
            .map(|line| line.message)
            .collect()
    }

    fn record(&self, level: LogLevel, message: &str) {
        if let Ok(mut lines) = self.lines.write() {
            lines.push(RecordedLine {
                level,
                message: message.to_owned(),
            });
        }
    }
}

impl ServiceLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }
}
