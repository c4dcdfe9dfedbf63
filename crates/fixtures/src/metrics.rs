//! Fixture lookup metrics.
//!
//! Provides functions for recording dataset lookup metrics.

use metrics::{counter, histogram};
use std::time::Instant;

/// Record how many rows a dataset lookup returned.
pub fn record_rows_returned(dataset: &str, rows: usize) {
    histogram!(
        "fixture_rows_returned",
        "dataset" => dataset.to_string()
    )
    .record(rows as f64);
}

/// Record a lookup that produced no rows.
pub fn record_empty_result(dataset: &str) {
    counter!(
        "fixture_empty_results_total",
        "dataset" => dataset.to_string()
    )
    .increment(1);
}

/// Record dataset lookup duration.
pub fn record_lookup_duration(dataset: &str, duration_secs: f64) {
    histogram!(
        "fixture_lookup_duration_seconds",
        "dataset" => dataset.to_string()
    )
    .record(duration_secs);
}

/// A helper to time dataset lookups and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = LookupTimer::new("sales");
/// let rows = filter_campaigns(&sales_campaigns(), &filter, policy)?;
/// timer.finish(rows.len());
/// ```
pub struct LookupTimer {
    dataset: &'static str,
    start: Instant,
}

impl LookupTimer {
    /// Create a new timer for the given dataset.
    pub fn new(dataset: &'static str) -> Self {
        Self {
            dataset,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration and row count.
    pub fn finish(self, rows: usize) {
        record_lookup_duration(self.dataset, self.start.elapsed().as_secs_f64());
        record_rows_returned(self.dataset, rows);
        if rows == 0 {
            record_empty_result(self.dataset);
        }
    }
}
