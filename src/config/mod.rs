//! TOML configuration for building a dispatcher.
//!
//! ```toml
//! sink = "file"
//! categories = ["debug", "error"]
//! file = "log.txt"
//! ```

use crate::category::CategoryFilter;
use crate::internal;
use crate::output::DEFAULT_LOG_FILE;
use crate::sink::Sink;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// `#[serde(default)]` on every field so an empty file yields the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    pub sink: Sink,
    /// Category names; `"all"` enables everything and an empty list disables everything.
    pub categories: Vec<String>,
    pub file: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            sink: Sink::Console,
            categories: vec!["all".to_string()],
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl DispatcherConfig {
    /// # Errors
    /// Fails on TOML syntax errors and unknown sink names.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// A missing file is not an error; it yields the defaults.
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::debug(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(config)
    }

    /// # Errors
    /// Returns [`crate::Error::InvalidCategory`] for the first unknown name.
    pub fn filter(&self) -> Result<CategoryFilter, crate::Error> {
        CategoryFilter::from_selectors(&self.categories)
    }
}
