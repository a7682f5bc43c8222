//! Destinations for the journal's informational messages.

use std::sync::Mutex;

/// Receives human-readable informational messages from the journal.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
}

/// Forwards messages to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn info(&self, message: &str) {
        log::info!(target: "ledgerline::journal", "{message}");
    }
}

/// Prints messages to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn info(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Keeps every message in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CapturingSink {
    messages: Mutex<Vec<String>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogSink for CapturingSink {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
