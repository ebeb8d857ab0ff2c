//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, IntCounter};

/// Global Prometheus handle reused in tests.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("tracker")
        .endpoint("/metrics") // exposed URL
        .build()
        .expect("metrics builder")
});

/// Full leaderboard rebuilds (cache misses that went to Postgres).
pub static LEADERBOARD_BUILDS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tracker_leaderboard_builds_total",
        "Leaderboards computed from the snapshot store"
    )
    .expect("leaderboard counter")
});
