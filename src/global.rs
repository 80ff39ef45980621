//! The process-wide dispatcher used by the `log_*!` macros.
//!
//! Lives until process exit. Code that can take a `&LogDispatcher` should do so;
//! this context exists for call sites that cannot.

use crate::category::CategoryFilter;
use crate::dispatcher::LogDispatcher;
use crate::sink::Sink;
use std::sync::OnceLock;

static GLOBAL_DISPATCHER: OnceLock<LogDispatcher> = OnceLock::new();

/// Returns the process-wide dispatcher, creating a default one (console, all
/// categories, `log.txt`) on first use.
#[must_use]
pub fn global() -> &'static LogDispatcher {
    GLOBAL_DISPATCHER.get_or_init(LogDispatcher::new)
}

/// Installs a caller-built dispatcher as the process-wide one.
///
/// # Errors
/// Hands the dispatcher back if the global was already initialised, either by an
/// earlier `install` or by a `global()` call.
pub fn install(dispatcher: LogDispatcher) -> Result<(), LogDispatcher> {
    GLOBAL_DISPATCHER.set(dispatcher)
}

/// Shorthand for `global().set_sink(sink)`.
pub fn set_sink(sink: Sink) {
    global().set_sink(sink);
}

/// Shorthand for `global().set_enabled_categories(categories)`.
pub fn set_enabled_categories(categories: impl Into<CategoryFilter>) {
    global().set_enabled_categories(categories);
}
