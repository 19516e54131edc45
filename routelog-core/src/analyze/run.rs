use crate::analyze::error::AnalyzeError;
use crate::analyze::parse::parse_line;
use crate::analyze::render::{RenderStyle, print, render_json, render_text};
use crate::analyze::report::{Report, build_report};
use crate::analyze::stats_aggregation::{Aggregation, StatsAggregator};
use crate::analyze::types::AnalysisSummary;
use anyhow::Result;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Analyze `path` and print the report in `format` to stdout.
///
/// Nothing is printed when the file cannot be analyzed.
pub fn run_analyze(path: &Path, format: ReportFormat, style: RenderStyle) -> Result<()> {
    let report = analyze_file(path)?;

    let output = match format {
        ReportFormat::Text => render_text(&report, style),
        ReportFormat::Json => render_json(&report)?,
    };

    print(&output)
}

/// Read, match and aggregate a whole file, then rank the result.
pub fn analyze_file(path: &Path) -> Result<Report, AnalyzeError> {
    let file = File::open(path).map_err(|e| AnalyzeError::file_access(path, e))?;
    tracing::debug!(path = %path.display(), "opened log file");

    let (agg, summary) = aggregate_lines(BufReader::new(file), path)?;

    tracing::info!(
        path = %path.display(),
        lines_read = summary.lines_read,
        lines_matched = summary.lines_matched,
        lines_skipped = summary.lines_skipped,
        endpoints = summary.endpoints,
        "analysis complete"
    );

    Ok(build_report(&agg).with_summary(summary))
}

/// Feed every line of `reader` through the matcher into a fresh aggregator.
///
/// `source` only labels errors. Lines are split on `\n`; a trailing `\r`
/// is dropped and invalid UTF-8 is replaced rather than rejected.
pub fn aggregate_lines<R: BufRead>(
    mut reader: R,
    source: &Path,
) -> Result<(Aggregation, AnalysisSummary), AnalyzeError> {
    let mut agg = StatsAggregator::new();
    let mut summary = AnalysisSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| AnalyzeError::read(source, e))?;
        if n == 0 {
            break;
        }

        summary.lines_read += 1;
        let line = String::from_utf8_lossy(trim_line_ending(&buf));

        match parse_line(&line) {
            Ok(Some(record)) => {
                summary.lines_matched += 1;
                agg.observe(&record);
            }
            Ok(None) => {
                summary.lines_skipped += 1;
                tracing::trace!(line = summary.lines_read, "skipped line without request pattern");
            }
            Err(e) => return Err(AnalyzeError::invalid_line(source, summary.lines_read, e)),
        }
    }

    summary.endpoints = agg.len() as u64;
    Ok((agg.finish(), summary))
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
