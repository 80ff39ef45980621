//! Sink backends. Each one lays out a [`LogRecord`] in its own format: coloured for
//! the console, timestamped plain text for the log file.

mod console;
mod file;

pub use console::{ConsoleOutput, Stream};
pub use file::{DEFAULT_LOG_FILE, FileOutput};

use crate::category::Category;
use chrono::{DateTime, Utc};

/// Call-site metadata captured by the emission macros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Source file; only error records carry it.
    pub file: Option<String>,
    pub function: String,
    /// Source line; only error records carry it.
    pub line: Option<u32>,
}

impl Location {
    #[must_use]
    pub fn function(function: impl Into<String>) -> Self {
        Self {
            file: None,
            function: function.into(),
            line: None,
        }
    }

    #[must_use]
    pub fn full(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            function: function.into(),
            line: Some(line),
        }
    }
}

/// One accepted emission, built only after the category filter has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub category: Category,
    /// Rendered by the file sink; info records never carry one.
    pub timestamp: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    /// Payload items, already converted to display text, in call order.
    pub values: Vec<String>,
}

impl LogRecord {
    /// Bare record with no metadata, as produced for info emissions.
    #[must_use]
    pub const fn new(category: Category, values: Vec<String>) -> Self {
        Self {
            category,
            timestamp: None,
            location: None,
            values,
        }
    }

    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn located(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub(crate) fn function(&self) -> Option<&str> {
        self.location.as_ref().map(|loc| loc.function.as_str())
    }
}

/// `Send + Sync` so one dispatcher can be shared across threads.
pub trait Output: Send + Sync {
    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), crate::Error>;
}
