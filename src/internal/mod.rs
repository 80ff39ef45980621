//! catlog's own diagnostics (unopenable log files, config loading), routed through a
//! second dispatcher that the application installs explicitly.
//!
//! Until [`init`] is called every diagnostic vanishes, so the library stays silent
//! by default.

use crate::dispatcher::LogDispatcher;
use std::cell::Cell;
use std::sync::OnceLock;

static INTERNAL_DISPATCHER: OnceLock<LogDispatcher> = OnceLock::new();

thread_local! {
    // A diagnostic raised while writing a diagnostic (e.g. the internal dispatcher's
    // own file cannot be opened) must not recurse.
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// Installs the diagnostics dispatcher. Only the first call takes effect.
///
/// Returns `false` if one was already installed.
pub fn init(dispatcher: LogDispatcher) -> bool {
    INTERNAL_DISPATCHER.set(dispatcher).is_ok()
}

fn report(emit: impl FnOnce(&LogDispatcher)) {
    let Some(dispatcher) = INTERNAL_DISPATCHER.get() else {
        return;
    };
    if REPORTING.with(|flag| flag.replace(true)) {
        return;
    }
    emit(dispatcher);
    REPORTING.with(|flag| flag.set(false));
}

/// Startup and configuration details.
pub fn debug(scope: &str, msg: &str) {
    report(|d| d.debug(scope, &[&msg]));
}

/// Failures, tagged with the caller's file and line.
#[track_caller]
pub fn error(scope: &str, msg: &str) {
    let caller = std::panic::Location::caller();
    report(|d| d.error(caller.file(), scope, caller.line(), &[&msg]));
}
