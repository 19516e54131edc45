/// Average latency above which an endpoint is flagged as a bottleneck.
pub const BOTTLENECK_THRESHOLD_MS: f64 = 500.0;

/// Number of endpoints shown in the by-volume view.
pub const TOP_VOLUME_LIMIT: usize = 3;

/// Status codes at or above this value count as errors (4xx and 5xx).
pub const ERROR_STATUS_MIN: u64 = 400;

/// Log file read when no path is given on the command line.
pub const DEFAULT_LOG_PATH: &str = "server.log";
