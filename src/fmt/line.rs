//! Every item is followed by a single space and the record ends with one newline.
//! The trailing space before the newline is part of the on-disk format.

use std::fmt::{self, Display, Write};

/// Accumulates the rendered items of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    buf: String,
}

impl Line {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` and its trailing separator.
    pub fn push(&mut self, item: impl Display) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "{item} ");
        self
    }

    pub fn extend<I, T>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        for item in items {
            self.push(item);
        }
        self
    }

    /// Terminates the record with exactly one newline.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.buf.push('\n');
        self.buf
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
