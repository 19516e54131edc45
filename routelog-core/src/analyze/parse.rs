use crate::analyze::error::LineError;
use crate::analyze::types::LogRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// <ws> METHOD <ws> ROUTE <ws> STATUS <ws> LATENCY "ms", anywhere in the line.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s(\w+)\s+([^ ]+)\s+([0-9]+)\s+([0-9]+)ms").expect("line pattern must compile")
});

/// Extract a [`LogRecord`] from one access-log line.
///
/// Returns `Ok(None)` for lines that do not carry the request pattern;
/// those are expected noise and are skipped by the caller. Only the
/// leftmost occurrence of the pattern is used.
pub fn parse_line(line: &str) -> Result<Option<LogRecord>, LineError> {
    let Some(caps) = LINE_PATTERN.captures(line) else {
        return Ok(None);
    };

    let method = &caps[1];
    let route = &caps[2];
    let status = parse_number("status", &caps[3])?;
    let latency_ms = parse_number("latency", &caps[4])?;

    Ok(Some(LogRecord {
        method: method.to_string(),
        route: route.to_string(),
        status,
        latency_ms,
    }))
}

fn parse_number(field: &'static str, token: &str) -> Result<u64, LineError> {
    token.parse::<u64>().map_err(|_| LineError::NumericOverflow {
        field,
        token: token.to_string(),
    })
}
