//! `catlog` - category-filtered logging to the console or an append-only file.
//!
//! One [`LogDispatcher`] holds the active [`Sink`] and the set of enabled
//! [`Category`]s. Four emission operations (info, debug, error, success) render
//! their values space-joined on a single line:
//!
//! - console: coloured `[DEBUG]:` / `[ERROR]:` / `[SUCCESS]:` tags, errors on stderr
//! - file: plain tags behind a `[YYYY-MM-DD HH:MM:SS]` UTC timestamp, appended to `log.txt`
//!
//! Logging never fails: suppressed categories, the `None` sink and an unopenable
//! log file all simply produce no output.
//!
//! # Example
//!
//! ```
//! use catlog::{Category, Sink, log_debug, log_error, log_info, log_success};
//!
//! catlog::set_sink(Sink::Console);
//! catlog::set_enabled_categories([Category::Info, Category::Error]);
//!
//! log_info!("listening on", 8080);
//! log_debug!("filtered out");
//! log_error!("bad", "input");
//! log_success!();
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `catlog` command-line binary

pub mod category;
pub mod config;
pub mod dispatcher;
mod error;
pub mod fmt;
mod global;
pub mod internal;
mod macros;
pub mod output;
pub mod sink;

pub use category::{Category, CategoryFilter};
pub use config::DispatcherConfig;
pub use dispatcher::{LogDispatcher, LogDispatcherBuilder};
pub use error::Error;
pub use global::{global, install, set_enabled_categories, set_sink};
pub use output::{ConsoleOutput, FileOutput, LogRecord, Output};
pub use sink::Sink;
