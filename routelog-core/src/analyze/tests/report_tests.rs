use crate::analyze::tests::test_helpers::record;
use crate::analyze::{
    Aggregation, EndpointKey, ErrorRow, LatencyRow, LogRecord, VolumeRow, build_report,
    is_bottleneck,
};
use pretty_assertions::assert_eq;

fn key(s: &str) -> EndpointKey {
    EndpointKey(s.to_string())
}

fn repeat(n: usize, r: LogRecord) -> Vec<LogRecord> {
    std::iter::repeat_n(r, n).collect()
}

fn sample() -> Aggregation {
    let mut records = Vec::new();
    records.extend(repeat(5, record("GET", "/a", 200, 100)));
    records.extend(repeat(4, record("GET", "/b", 200, 50)));
    records.push(record("GET", "/b", 500, 50));
    records.extend(repeat(3, record("POST", "/c", 404, 900)));
    records.extend(repeat(2, record("GET", "/d", 200, 10)));
    records.into_iter().collect()
}

//-----------------------------------------------------------------------------
// Volume
//-----------------------------------------------------------------------------
#[test]
fn volume_is_truncated_to_three() {
    // Arrange
    let agg = sample();

    // Act
    let report = build_report(&agg);

    // Assert
    assert_eq!(
        report.by_volume,
        vec![
            VolumeRow { endpoint: key("GET /a"), count: 5 },
            VolumeRow { endpoint: key("GET /b"), count: 5 },
            VolumeRow { endpoint: key("POST /c"), count: 3 },
        ]
    );
}

#[test]
fn volume_ties_break_on_key() {
    let agg: Aggregation = vec![
        record("GET", "/zeta", 200, 1),
        record("GET", "/alpha", 200, 1),
        record("DELETE", "/alpha", 200, 1),
        record("GET", "/mid", 200, 1),
    ]
    .into_iter()
    .collect();

    let report = build_report(&agg);

    let keys: Vec<&str> = report.by_volume.iter().map(|r| r.endpoint.as_str()).collect();
    assert_eq!(keys, vec!["DELETE /alpha", "GET /alpha", "GET /mid"]);
}

#[test]
fn volume_with_fewer_than_three_endpoints() {
    let agg: Aggregation = vec![record("GET", "/only", 200, 1)].into_iter().collect();

    let report = build_report(&agg);

    assert_eq!(report.by_volume.len(), 1);
}

//-----------------------------------------------------------------------------
// Errors
//-----------------------------------------------------------------------------
#[test]
fn errors_include_only_failing_endpoints() {
    let report = build_report(&sample());

    assert_eq!(
        report.by_errors,
        vec![
            ErrorRow {
                endpoint: key("POST /c"),
                error_count: 3,
                count: 3,
                error_rate_pct: 100.0,
            },
            ErrorRow {
                endpoint: key("GET /b"),
                error_count: 1,
                count: 5,
                error_rate_pct: 20.0,
            },
        ]
    );
}

#[test]
fn errors_are_not_truncated() {
    let agg: Aggregation = (0..6)
        .map(|i| record("GET", &format!("/e{i}"), 500, 1))
        .collect();

    let report = build_report(&agg);

    assert_eq!(report.by_errors.len(), 6);
    assert_eq!(report.by_errors[0].endpoint, key("GET /e0"));
    assert_eq!(report.by_errors[5].endpoint, key("GET /e5"));
}

//-----------------------------------------------------------------------------
// Latency
//-----------------------------------------------------------------------------
#[test]
fn latency_lists_every_endpoint_slowest_first() {
    let report = build_report(&sample());

    assert_eq!(
        report.by_latency,
        vec![
            LatencyRow {
                endpoint: key("POST /c"),
                avg_latency_ms: 900.0,
                bottleneck: true,
            },
            LatencyRow {
                endpoint: key("GET /a"),
                avg_latency_ms: 100.0,
                bottleneck: false,
            },
            LatencyRow {
                endpoint: key("GET /b"),
                avg_latency_ms: 50.0,
                bottleneck: false,
            },
            LatencyRow {
                endpoint: key("GET /d"),
                avg_latency_ms: 10.0,
                bottleneck: false,
            },
        ]
    );
}

#[test]
fn latency_ties_break_on_key() {
    let agg: Aggregation = vec![record("GET", "/b", 200, 70), record("GET", "/a", 200, 70)]
        .into_iter()
        .collect();

    let report = build_report(&agg);

    let keys: Vec<&str> = report.by_latency.iter().map(|r| r.endpoint.as_str()).collect();
    assert_eq!(keys, vec!["GET /a", "GET /b"]);
}

#[test]
fn bottleneck_threshold_is_exclusive() {
    // 1500ms over 3 requests averages exactly 500ms.
    let agg: Aggregation = vec![
        record("GET", "/edge", 200, 400),
        record("GET", "/edge", 200, 500),
        record("GET", "/edge", 200, 600),
    ]
    .into_iter()
    .collect();

    let report = build_report(&agg);

    assert_eq!(report.by_latency[0].avg_latency_ms, 500.0);
    assert!(!report.by_latency[0].bottleneck);
    assert!(!is_bottleneck(500.0));
    assert!(is_bottleneck(500.01));
}

//-----------------------------------------------------------------------------
// Purity
//-----------------------------------------------------------------------------
#[test]
fn building_twice_is_identical_and_leaves_input_alone() {
    // Arrange
    let agg = sample();
    let before = agg.clone();

    // Act
    let first = build_report(&agg);
    let second = build_report(&agg);

    // Assert
    assert_eq!(first, second);
    assert_eq!(agg, before);
}

#[test]
fn empty_aggregation_gives_empty_views() {
    let report = build_report(&Aggregation::default());

    assert!(report.by_volume.is_empty());
    assert!(report.by_errors.is_empty());
    assert!(report.by_latency.is_empty());
    assert_eq!(report.summary.endpoints, 0);
}
