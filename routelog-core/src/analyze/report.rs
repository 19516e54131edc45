use crate::analyze::constants::{BOTTLENECK_THRESHOLD_MS, TOP_VOLUME_LIMIT};
use crate::analyze::stats_aggregation::Aggregation;
use crate::analyze::types::{AnalysisSummary, EndpointKey, EndpointStats};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VolumeRow {
    pub endpoint: EndpointKey,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorRow {
    pub endpoint: EndpointKey,
    pub error_count: u64,
    pub count: u64,
    pub error_rate_pct: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LatencyRow {
    pub endpoint: EndpointKey,
    pub avg_latency_ms: f64,
    pub bottleneck: bool,
}

/// The three ranked views over a finished aggregation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub summary: AnalysisSummary,
    pub by_volume: Vec<VolumeRow>,
    pub by_errors: Vec<ErrorRow>,
    pub by_latency: Vec<LatencyRow>,
}

impl Report {
    pub fn with_summary(mut self, summary: AnalysisSummary) -> Self {
        self.summary = summary;
        self
    }
}

/// Build the ranked views. Pure: the aggregation is only read.
///
/// Every view sorts descending on its metric and breaks ties on the
/// endpoint key, ascending, so output does not depend on map order.
pub fn build_report(agg: &Aggregation) -> Report {
    let mut entries: Vec<(&EndpointKey, &EndpointStats)> = agg.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    Report {
        summary: AnalysisSummary {
            endpoints: entries.len() as u64,
            ..AnalysisSummary::default()
        },
        by_volume: by_volume(&entries),
        by_errors: by_errors(&entries),
        by_latency: by_latency(&entries),
    }
}

pub fn is_bottleneck(avg_latency_ms: f64) -> bool {
    avg_latency_ms > BOTTLENECK_THRESHOLD_MS
}

fn by_volume(entries: &[(&EndpointKey, &EndpointStats)]) -> Vec<VolumeRow> {
    let mut rows: Vec<VolumeRow> = entries
        .iter()
        .map(|(key, stats)| VolumeRow {
            endpoint: (*key).clone(),
            count: stats.count,
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.endpoint.cmp(&b.endpoint)));
    rows.truncate(TOP_VOLUME_LIMIT);
    rows
}

fn by_errors(entries: &[(&EndpointKey, &EndpointStats)]) -> Vec<ErrorRow> {
    let mut rows: Vec<ErrorRow> = entries
        .iter()
        .filter(|(_, stats)| stats.error_count > 0)
        .map(|(key, stats)| ErrorRow {
            endpoint: (*key).clone(),
            error_count: stats.error_count,
            count: stats.count,
            error_rate_pct: stats.error_rate_pct(),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.error_count
            .cmp(&a.error_count)
            .then_with(|| a.endpoint.cmp(&b.endpoint))
    });
    rows
}

fn by_latency(entries: &[(&EndpointKey, &EndpointStats)]) -> Vec<LatencyRow> {
    let mut rows: Vec<LatencyRow> = entries
        .iter()
        .map(|(key, stats)| {
            let avg = stats.avg_latency_ms();
            LatencyRow {
                endpoint: (*key).clone(),
                avg_latency_ms: avg,
                bottleneck: is_bottleneck(avg),
            }
        })
        .collect();

    rows.sort_by(|a, b| match b.avg_latency_ms.total_cmp(&a.avg_latency_ms) {
        Ordering::Equal => a.endpoint.cmp(&b.endpoint),
        other => other,
    });
    rows
}
