use crate::analyze::report::Report;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

const BANNER_WIDTH: usize = 60;
const BOTTLENECK_MARKER: &str = "⚠️ ";
const NO_MARKER: &str = "   ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStyle {
    pub color: bool,
}

impl RenderStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Colour only when stdout is a terminal and the caller allows it.
    pub fn detect(allow_color: bool) -> Self {
        Self {
            color: allow_color && io::stdout().is_terminal(),
        }
    }
}

pub fn render_text(report: &Report, style: RenderStyle) -> String {
    let mut out = String::new();
    let rule = "=".repeat(BANNER_WIDTH);

    out.push_str(&format!(
        "{rule}\n{}\n{rule}\n",
        title(style, "LOG ANALYZER - ENDPOINT EFFICIENCY REPORT")
    ));

    //-------------------------------------------------------------------------
    // 1. Volume
    //-------------------------------------------------------------------------
    out.push_str(&format!(
        "\n{}\n",
        title(style, "--- 1. Most Accessed Endpoints (Volume) ---")
    ));
    if report.by_volume.is_empty() {
        out.push_str("(none)\n");
    }
    for row in &report.by_volume {
        out.push_str(&format!("[{} requests] {}\n", row.count, row.endpoint));
    }

    //-------------------------------------------------------------------------
    // 2. Errors
    //-------------------------------------------------------------------------
    out.push_str(&format!(
        "\n{}\n",
        title(style, "--- 2. Endpoints With Errors (4xx/5xx) ---")
    ));
    if report.by_errors.is_empty() {
        out.push_str("(none)\n");
    }
    for row in &report.by_errors {
        out.push_str(&format!(
            "[{} errors] {} (error rate: {:.1}%)\n",
            row.error_count, row.endpoint, row.error_rate_pct
        ));
    }

    //-------------------------------------------------------------------------
    // 3. Latency
    //-------------------------------------------------------------------------
    out.push_str(&format!(
        "\n{}\n",
        title(style, "--- 3. Slow Endpoints (Potential Bottlenecks) ---")
    ));
    if report.by_latency.is_empty() {
        out.push_str("(none)\n");
    }
    for row in &report.by_latency {
        let marker = if row.bottleneck {
            BOTTLENECK_MARKER
        } else {
            NO_MARKER
        };
        let line = format!(
            "{marker}avg: {}ms - {}",
            format_ms(row.avg_latency_ms),
            row.endpoint
        );
        if row.bottleneck && style.color {
            out.push_str(&format!("{}\n", line.yellow()));
        } else {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn print(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Whole milliseconds, halves rounded to even.
pub fn format_ms(avg_latency_ms: f64) -> String {
    format!("{avg_latency_ms:.0}")
}

fn title(style: RenderStyle, text: &str) -> String {
    if style.color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
