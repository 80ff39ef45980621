//! File sink: plain tags, UTC timestamp prefix, one open-append-close per record.

use super::{LogRecord, Output};
use crate::category::Category;
use crate::fmt::{Line, plain_tag, timestamp};
use crate::internal;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Resolved against the process's working directory.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl FileOutput {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lays out the record for the log file.
    ///
    /// - info: `values`
    /// - debug: `[ts] tag function : values`
    /// - error: `[ts] tag line : function : values`
    /// - success: `[ts] tag function`
    ///
    /// The file name is not repeated in error lines; the console layout keeps it.
    #[must_use]
    pub fn format_content(&self, record: &LogRecord) -> String {
        let mut line = Line::new();

        if record.category != Category::Info
            && let Some(at) = record.timestamp
        {
            line.push(timestamp(at));
        }
        if let Some(tag) = plain_tag(record.category) {
            line.push(tag);
        }

        match record.category {
            Category::Info => {
                line.extend(&record.values);
            }
            Category::Debug => {
                if let Some(function) = record.function() {
                    line.push(function).push(":");
                }
                line.extend(&record.values);
            }
            Category::Error => {
                if let Some(number) = record.location.as_ref().and_then(|loc| loc.line) {
                    line.push(number).push(":");
                }
                if let Some(function) = record.function() {
                    line.push(function).push(":");
                }
                line.extend(&record.values);
            }
            Category::Success => {
                if let Some(function) = record.function() {
                    line.push(function);
                }
            }
        }

        line.finish()
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        // The handle is dropped, and so closed, on every return path.
        let mut file = match OpenOptions::new().create(true).append(true).open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                internal::error("FILE", &format!("Cannot open {}: {e}", self.path.display()));
                return Err(e.into());
            }
        };

        // Single write so a record is never split across appends.
        let content = self.format_content(record);
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
