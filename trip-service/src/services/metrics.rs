//! Prometheus metrics for trip-service.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, HistogramVec, TextEncoder,
};

/// Trip write counter by operation (created, deleted).
pub static TRIPS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "trip_service_trips_total",
        "Total number of trip write operations",
        &["operation"]
    )
    .expect("Failed to register trips_total")
});

/// Login attempt counter by outcome (success, failure).
pub static LOGINS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "trip_service_logins_total",
        "Total number of login attempts by outcome",
        &["outcome"]
    )
    .expect("Failed to register logins_total")
});

/// Bill parse counter by source (text, scan).
pub static BILL_PARSES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "trip_service_bill_parses_total",
        "Total number of bill texts parsed by source",
        &["source"]
    )
    .expect("Failed to register bill_parses_total")
});

/// Database query duration histogram.
pub static DB_QUERY_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "trip_service_db_query_duration_seconds",
        "Database query duration in seconds",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("Failed to register db_query_duration")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&TRIPS_TOTAL);
    Lazy::force(&LOGINS_TOTAL);
    Lazy::force(&BILL_PARSES_TOTAL);
    Lazy::force(&DB_QUERY_DURATION);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
