use crate::analyze::constants::ERROR_STATUS_MIN;
use crate::analyze::types::{EndpointKey, EndpointStats, LogRecord};
use std::collections::HashMap;

/// Per-endpoint running totals for one log file.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    endpoints: HashMap<EndpointKey, EndpointStats>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: &LogRecord) {
        let stats = self.endpoints.entry(record.endpoint()).or_default();

        stats.count += 1;
        stats.total_latency_ms += u128::from(record.latency_ms);

        if record.status >= ERROR_STATUS_MIN {
            stats.error_count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Close the aggregation. The report is only ever built from the result.
    pub fn finish(self) -> Aggregation {
        Aggregation {
            endpoints: self.endpoints,
        }
    }
}

/// Completed, read-only aggregation handed to the report builder.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Aggregation {
    endpoints: HashMap<EndpointKey, EndpointStats>,
}

impl Aggregation {
    pub fn get(&self, key: &EndpointKey) -> Option<&EndpointStats> {
        self.endpoints.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EndpointKey, &EndpointStats)> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl FromIterator<LogRecord> for Aggregation {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        let mut agg = StatsAggregator::new();
        for record in iter {
            agg.observe(&record);
        }
        agg.finish()
    }
}
