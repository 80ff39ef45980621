//! Dispatcher construction from a parsed [`DispatcherConfig`].

use super::LogDispatcher;
use crate::config::DispatcherConfig;
use crate::internal;

impl LogDispatcher {
    /// # Errors
    /// Returns [`crate::Error::InvalidCategory`] when the category list names an unknown category.
    pub fn from_config(config: &DispatcherConfig) -> Result<Self, crate::Error> {
        let filter = config.filter()?;
        internal::debug(
            "DISPATCHER",
            &format!(
                "sink={} categories={} file={}",
                config.sink, filter, config.file
            ),
        );

        Ok(Self::builder()
            .sink(config.sink)
            .categories(filter)
            .file_path(&config.file)
            .build())
    }
}
