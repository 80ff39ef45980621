//! Construction-time settings. The log file path can only be chosen here;
//! at runtime only the sink and the filter change.

use super::{LogDispatcher, State};
use crate::category::CategoryFilter;
use crate::output::{ConsoleOutput, DEFAULT_LOG_FILE, FileOutput};
use crate::sink::Sink;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

#[derive(Debug, Clone)]
pub struct LogDispatcherBuilder {
    sink: Sink,
    filter: CategoryFilter,
    file_path: PathBuf,
    console_stderr_only: bool,
}

impl Default for LogDispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDispatcherBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Sink::Console,
            filter: CategoryFilter::All,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
            console_stderr_only: false,
        }
    }

    #[must_use]
    pub const fn sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn categories(mut self, categories: impl Into<CategoryFilter>) -> Self {
        self.filter = categories.into();
        self
    }

    /// Relative paths resolve against the working directory at each write.
    #[must_use]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Sends every console record to stderr, as diagnostics dispatchers need.
    #[must_use]
    pub const fn console_stderr_only(mut self, enabled: bool) -> Self {
        self.console_stderr_only = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> LogDispatcher {
        LogDispatcher {
            state: RwLock::new(State {
                sink: self.sink,
                filter: self.filter,
            }),
            console: ConsoleOutput::new().stderr_only(self.console_stderr_only),
            file: FileOutput::new(self.file_path),
            file_lock: Mutex::new(()),
        }
    }
}
