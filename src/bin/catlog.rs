//! One-shot command-line front end for shell scripts that want the same log
//! format as the applications around them.
//!
//! Usage:
//!   catlog info <values...>
//!   catlog debug --function <name> <values...>
//!   catlog error --file-name <file> --function <name> --line <n> <values...>
//!   catlog success --function <name>
//!
//! Global options select the sink, the enabled categories, the log file, or a
//! TOML config file; explicit options override the config.

use catlog::{CategoryFilter, DispatcherConfig, LogDispatcher, Sink, internal};
use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "catlog", version, about = "Write a categorised log record")]
struct Cli {
    /// Destination: console, file, or none
    #[arg(long, global = true)]
    sink: Option<Sink>,
    /// Comma-separated categories to enable, or "all"
    #[arg(long, global = true)]
    categories: Option<CategoryFilter>,
    /// Log file used by the file sink
    #[arg(long = "file", global = true)]
    file: Option<PathBuf>,
    /// TOML config providing defaults for the options above
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Report catlog's own diagnostics on stderr
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Untagged values
    Info {
        values: Vec<String>,
    },
    /// Values tagged with a function name
    Debug {
        #[arg(long, default_value = "main")]
        function: String,
        values: Vec<String>,
    },
    /// Values tagged with file, function and line
    Error {
        #[arg(long = "file-name", default_value = "-")]
        file_name: String,
        #[arg(long, default_value = "main")]
        function: String,
        #[arg(long, default_value_t = 0)]
        line: u32,
        values: Vec<String>,
    },
    /// Success marker for a function
    Success {
        #[arg(long, default_value = "main")]
        function: String,
    },
}

fn build_dispatcher(cli: &Cli) -> Result<LogDispatcher, catlog::Error> {
    let mut config = match &cli.config {
        Some(path) => DispatcherConfig::load_from(path)?,
        None => DispatcherConfig::default(),
    };
    if let Some(file) = &cli.file {
        config.file = file.to_string_lossy().into_owned();
    }

    let dispatcher = LogDispatcher::from_config(&config)?;
    if let Some(sink) = cli.sink {
        dispatcher.set_sink(sink);
    }
    if let Some(categories) = &cli.categories {
        dispatcher.set_enabled_categories(categories.clone());
    }
    Ok(dispatcher)
}

fn as_display(values: &[String]) -> Vec<&dyn Display> {
    values.iter().map(|v| v as &dyn Display).collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        internal::init(
            LogDispatcher::builder()
                .sink(Sink::Console)
                .console_stderr_only(true)
                .build(),
        );
    }

    let dispatcher = match build_dispatcher(&cli) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("catlog: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &cli.command {
        Command::Info { values } => dispatcher.info(&as_display(values)),
        Command::Debug { function, values } => dispatcher.debug(function, &as_display(values)),
        Command::Error {
            file_name,
            function,
            line,
            values,
        } => dispatcher.error(file_name, function, *line, &as_display(values)),
        Command::Success { function } => dispatcher.success(function),
    }

    let _ = dispatcher.flush();
    ExitCode::SUCCESS
}
