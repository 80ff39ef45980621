//! Destination selection for every subsequent emission.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sink {
    /// Every emission is a no-op.
    #[serde(alias = "off")]
    None,
    /// stdout, or stderr for error records.
    #[default]
    #[serde(alias = "stdout")]
    Console,
    /// The append-only log file.
    File,
}

impl Sink {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Console => "console",
            Self::File => "file",
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sink {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "console" | "stdout" => Ok(Self::Console),
            "file" => Ok(Self::File),
            _ => Err(crate::Error::InvalidSink(s.to_string())),
        }
    }
}
