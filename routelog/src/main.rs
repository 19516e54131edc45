use clap::Parser;
use routelog_core::analyze::{DEFAULT_LOG_PATH, RenderStyle, ReportFormat, run_analyze};
use routelog_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "routelog",
    version,
    about = "routelog: endpoint volume, error and latency report for access logs"
)]
struct Cli {
    /// Path to the access log
    #[arg(default_value = DEFAULT_LOG_PATH)]
    path: PathBuf,

    /// Report output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Disable ANSI colors in the text report
    #[arg(long)]
    no_color: bool,

    /// Diagnostic log format on stderr (defaults to pretty on a terminal, json otherwise)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let style = RenderStyle::detect(!cli.no_color);

    if let Err(e) = run_analyze(&cli.path, cli.format, style) {
        tracing::error!(path = %cli.path.display(), error = %e, "analysis failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
