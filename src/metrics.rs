//! Metrics instrumentation for ddns-backend.
//!
//! All metrics are prefixed with `ddns_backend.`

use metrics::{counter, gauge, histogram};
use std::time::Instant;

/// Record a lookup handled by the resolution core.
pub fn record_lookup(qtype: &str, result: LookupResult, duration: std::time::Duration) {
    let result_str = match result {
        LookupResult::Found => "found",
        LookupResult::NotFound => "not_found",
        LookupResult::SoaSynthesized => "soa_synthesized",
        LookupResult::StoreError => "store_error",
    };

    counter!("ddns_backend.lookup.count", "qtype" => qtype.to_string(), "result" => result_str)
        .increment(1);
    histogram!("ddns_backend.lookup.duration.seconds", "qtype" => qtype.to_string())
        .record(duration.as_secs_f64());
}

/// Lookup result type for metrics.
#[derive(Debug, Clone, Copy)]
pub enum LookupResult {
    /// A stored record answered the query.
    Found,
    /// No record matched. Expected and common, never a failure.
    NotFound,
    /// The apex SOA answer was synthesized.
    SoaSynthesized,
    /// The record store could not be queried.
    StoreError,
}

/// Record a zone housekeeping request (metadata, domain listing).
pub fn record_housekeeping(endpoint: &str) {
    counter!("ddns_backend.housekeeping.count", "endpoint" => endpoint.to_string()).increment(1);
}

/// Record the in-memory store size (call on change).
pub fn record_store_records(count: usize) {
    gauge!("ddns_backend.store.records.count").set(count as f64);
}

/// Helper for timing operations.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration since timer start.
    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}
