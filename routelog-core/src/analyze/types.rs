use serde::Serialize;
use std::fmt;

/// One access-log line reduced to the fields the report cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub method: String,
    pub route: String,
    pub status: u64,
    pub latency_ms: u64,
}

impl LogRecord {
    pub fn endpoint(&self) -> EndpointKey {
        EndpointKey::new(&self.method, &self.route)
    }
}

/// `"<method> <route>"`, the unit statistics are grouped by.
///
/// Ordering is lexicographic on the formatted key and is what the report
/// uses to break ties.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EndpointKey(pub String);

impl EndpointKey {
    pub fn new(method: &str, route: &str) -> Self {
        Self(format!("{method} {route}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Running totals for one endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointStats {
    pub count: u64,
    pub error_count: u64,
    pub total_latency_ms: u128,
}

impl EndpointStats {
    /// Mean latency in milliseconds. Zero for an entry with no requests.
    pub fn avg_latency_ms(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total_latency_ms as f64 / self.count as f64
    }

    /// Share of requests that failed, as a percentage.
    pub fn error_rate_pct(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.error_count as f64 / self.count as f64) * 100.0
    }
}

/// Line counters for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub lines_read: u64,
    pub lines_matched: u64,
    pub lines_skipped: u64,
    pub endpoints: u64,
}
