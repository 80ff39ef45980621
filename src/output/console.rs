//! Console sink: coloured tags, no timestamps, errors on stderr.

use super::{LogRecord, Output};
use crate::category::Category;
use crate::fmt::{Line, colored_tag};
use std::io::{self, Write};

/// Which standard stream a record is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput {
    /// Every category goes to stderr.
    stderr_only: bool,
}

impl ConsoleOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self { stderr_only: false }
    }

    /// Routes every category to stderr.
    #[must_use]
    pub const fn stderr_only(mut self, enabled: bool) -> Self {
        self.stderr_only = enabled;
        self
    }

    /// Error records go to stderr; everything else to stdout.
    #[must_use]
    pub const fn stream_for(category: Category) -> Stream {
        match category {
            Category::Error => Stream::Stderr,
            Category::Info | Category::Debug | Category::Success => Stream::Stdout,
        }
    }

    /// The stream this output actually writes `category` to.
    #[must_use]
    pub const fn stream(&self, category: Category) -> Stream {
        if self.stderr_only {
            Stream::Stderr
        } else {
            Self::stream_for(category)
        }
    }

    /// Lays out the record and picks its stream.
    ///
    /// - info: `values`
    /// - debug: `tag function : values`
    /// - error: `tag file : line : function : values`
    /// - success: `tag function`
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> (Stream, String) {
        let mut line = Line::new();

        if let Some(tag) = colored_tag(record.category) {
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
                let location = record.location.as_ref();
                if let Some(file) = location.and_then(|loc| loc.file.as_ref()) {
                    line.push(file).push(":");
                }
                if let Some(number) = location.and_then(|loc| loc.line) {
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

        (self.stream(record.category), line.finish())
    }
}

impl Output for ConsoleOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let (stream, text) = self.render(record);
        match stream {
            Stream::Stdout => io::stdout().lock().write_all(text.as_bytes())?,
            Stream::Stderr => io::stderr().lock().write_all(text.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
