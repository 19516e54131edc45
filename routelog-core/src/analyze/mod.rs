//! Access Log Analysis Pipeline
//!
//! Reads a server access log and summarizes how each endpoint behaves:
//! how often it is called, how often it fails, and how slow it is.
//!
//! Most lines in a real log are noise for this purpose. Only lines that
//! carry a request of the shape `METHOD ROUTE STATUS LATENCYms` (anywhere
//! in the line, usually after a timestamp) are counted. Everything else is
//! skipped without complaint.
//!
//! The report ranks endpoints three ways:
//! - **Volume**: the three most requested endpoints
//! - **Errors**: every endpoint that returned a 4xx or 5xx, with its error rate
//! - **Latency**: every endpoint by average latency, flagging the ones above
//!   the bottleneck threshold
//!
//! The overall data processing architecture is:
//!
//! file
//! parse_line
//! LogRecord
//! StatsAggregator
//! Aggregation
//! build_report
//! Report
//! render_text / render_json
//!

mod constants;
mod error;
mod parse;
mod render;
mod report;
mod run;
mod stats_aggregation;
mod types;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use error::*;
pub use parse::parse_line;
pub use render::{RenderStyle, format_ms, render_json, render_text};
pub use report::*;
pub use run::*;
pub use stats_aggregation::*;
pub use types::*;
