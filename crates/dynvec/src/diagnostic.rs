use std::mem;

use log::warn;
use parking_lot::Mutex;

use crate::Error;

/// Receives the precondition violations that element-wise operations
/// degrade into an empty result.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Error);
}

/// Forwards diagnostics to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Error) {
        warn!("{diagnostic}");
    }
}

/// Keeps every reported diagnostic until [`take`](Self::take) is called.
#[derive(Debug, Default)]
pub struct RecordingSink {
    reported: Mutex<Vec<Error>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reported.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains the diagnostics reported so far, oldest first.
    pub fn take(&self) -> Vec<Error> {
        mem::take(&mut *self.reported.lock())
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Error) {
        self.reported.lock().push(diagnostic.clone());
    }
}
