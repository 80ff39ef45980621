//! The dispatcher owns the sink selection and the category filter, and turns each
//! accepted emission into exactly one write on the selected sink.
//!
//! Emission never fails from the caller's point of view: filtered categories, a
//! `None` sink and an unopenable log file all end the call without I/O or error.

mod builder;
mod from_config;

pub use builder::LogDispatcherBuilder;

use crate::category::{Category, CategoryFilter};
use crate::output::{ConsoleOutput, FileOutput, Location, LogRecord, Output};
use crate::sink::Sink;
use chrono::Utc;
use std::fmt::Display;
use std::path::Path;
use std::sync::{Mutex, PoisonError, RwLock};

#[derive(Debug, Clone, Default)]
struct State {
    sink: Sink,
    filter: CategoryFilter,
}

/// Shared by reference (usually through [`crate::global`]); every setter takes `&self`.
#[derive(Debug)]
pub struct LogDispatcher {
    state: RwLock<State>,
    console: ConsoleOutput,
    file: FileOutput,
    /// Serialises each open-append-close sequence on the log file.
    file_lock: Mutex<()>,
}

impl Default for LogDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDispatcher {
    /// Console sink, every category enabled, `log.txt` as the file sink.
    #[must_use]
    pub fn new() -> Self {
        LogDispatcherBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LogDispatcherBuilder {
        LogDispatcherBuilder::new()
    }

    /// Takes effect on the next emission. No validation: an unopenable file only
    /// shows up as dropped records later.
    pub fn set_sink(&self, sink: Sink) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sink = sink;
    }

    /// Replaces the whole filter; categories are never added incrementally.
    pub fn set_enabled_categories(&self, categories: impl Into<CategoryFilter>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .filter = categories.into();
    }

    #[must_use]
    pub fn sink(&self) -> Sink {
        self.state.read().unwrap_or_else(PoisonError::into_inner).sink
    }

    #[must_use]
    pub fn enabled_categories(&self) -> CategoryFilter {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .filter
            .clone()
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        self.file.path()
    }

    /// True when an emission of `category` would reach a sink.
    #[must_use]
    pub fn is_enabled(&self, category: Category) -> bool {
        self.admit(category).is_some()
    }

    /// Untagged, untimestamped values.
    pub fn info(&self, values: &[&dyn Display]) {
        self.dispatch(Category::Info, || {
            LogRecord::new(Category::Info, render_values(values))
        });
    }

    pub fn debug(&self, function: &str, values: &[&dyn Display]) {
        self.dispatch(Category::Debug, || {
            LogRecord::new(Category::Debug, render_values(values))
                .at(Utc::now())
                .located(Location::function(function))
        });
    }

    /// Error records go to stderr on the console sink.
    pub fn error(&self, file: &str, function: &str, line: u32, values: &[&dyn Display]) {
        self.dispatch(Category::Error, || {
            LogRecord::new(Category::Error, render_values(values))
                .at(Utc::now())
                .located(Location::full(file, function, line))
        });
    }

    /// Fixed two-field shape: tag and function name, no payload.
    pub fn success(&self, function: &str) {
        self.dispatch(Category::Success, || {
            LogRecord::new(Category::Success, Vec::new())
                .at(Utc::now())
                .located(Location::function(function))
        });
    }

    /// The file sink closes after every record, so only the console has anything to flush.
    ///
    /// # Errors
    /// I/O errors from stdout or stderr.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.console.flush()
    }

    /// Resolves the sink a record of `category` would go to, or `None` when it is dropped.
    fn admit(&self, category: Category) -> Option<Sink> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if !state.filter.allows(category) {
            return None;
        }
        match state.sink {
            Sink::None => None,
            sink => Some(sink),
        }
    }

    /// Filter first, then build, then write. The record closure only runs for admitted categories.
    fn dispatch(&self, category: Category, build: impl FnOnce() -> LogRecord) {
        let Some(sink) = self.admit(category) else {
            return;
        };

        let record = build();

        match sink {
            Sink::Console => {
                let _ = self.console.write(&record);
            }
            Sink::File => {
                let _guard = self.file_lock.lock().unwrap_or_else(PoisonError::into_inner);
                let _ = self.file.write(&record);
            }
            Sink::None => {}
        }
    }
}

fn render_values(values: &[&dyn Display]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn recovers_from_poisoned_locks() {
        let dir = TempDir::new().unwrap();
        let dispatcher = LogDispatcher::builder()
            .sink(Sink::None)
            .file_path(dir.path().join("log.txt"))
            .build();

        std::thread::scope(|scope| {
            let handle = scope.spawn(|| {
                let _state = dispatcher.state.write().unwrap();
                let _file = dispatcher.file_lock.lock().unwrap();
                panic!("holding both locks");
            });
            assert!(handle.join().is_err());
        });
        assert!(dispatcher.state.is_poisoned());
        assert!(dispatcher.file_lock.is_poisoned());

        dispatcher.set_sink(Sink::File);
        dispatcher.set_enabled_categories(Category::Info);
        assert_eq!(dispatcher.sink(), Sink::File);
        assert!(dispatcher.is_enabled(Category::Info));
        assert!(!dispatcher.is_enabled(Category::Error));

        dispatcher.info(&[&"still", &"logging"]);
        let content = fs::read_to_string(dispatcher.file_path()).unwrap();
        assert_eq!(content, "still logging \n");
    }
}
