use clap::ValueEnum;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Initialize the logging system with environment-based filtering.
///
/// Events are written to stderr:
/// - `RUST_LOG` selects the level (defaults to [`DEFAULT_FILTER`])
/// - `LogFormat::Json` flattens event fields for machine consumption
/// - `LogFormat::Pretty` uses the compact human-readable formatter
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.compact().with_target(false).init(),
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}
