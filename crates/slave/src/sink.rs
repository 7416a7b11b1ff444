use std::sync::{Arc, Mutex};

use tether_core::{LogCategory, LogSink, Status};

/// Forwards protocol log messages to `tracing`.
///
/// The tracing level follows the message status: errors and fatals at error
/// level, warnings and discards at warn, the rest at debug.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn message(&mut self, instance: &str, status: Status, category: LogCategory, message: &str) {
        match status {
            Status::Error | Status::Fatal => {
                tracing::error!(instance, category = category.name(), "{message}");
            }
            Status::Warning | Status::Discard => {
                tracing::warn!(instance, category = category.name(), "{message}");
            }
            Status::Ok | Status::Pending => {
                tracing::debug!(instance, category = category.name(), "{message}");
            }
        }
    }
}

/// One captured protocol log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub instance: String,
    pub status: Status,
    pub category: LogCategory,
    pub message: String,
}

/// Captures protocol log messages for inspection.
///
/// Clones share the same record buffer, so a caller can keep one handle and
/// hand the other to the slave.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records captured so far.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("sink lock poisoned").clone()
    }

    /// Records whose category matches.
    #[must_use]
    pub fn records_for(&self, category: LogCategory) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.category == category)
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn message(&mut self, instance: &str, status: Status, category: LogCategory, message: &str) {
        self.records.lock().expect("sink lock poisoned").push(LogRecord {
            instance: instance.to_owned(),
            status,
            category,
            message: message.to_owned(),
        });
    }
}
