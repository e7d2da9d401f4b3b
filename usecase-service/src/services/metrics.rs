//! Prometheus metrics for usecase-service.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Call once at startup.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

/// Metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record one use-case lookup and whether it matched the catalog.
pub fn record_lookup(industry: &str, business_function: &str, matched: bool) {
    let labels = [
        ("industry", industry.to_string()),
        ("business_function", business_function.to_string()),
        ("matched", matched.to_string()),
    ];
    counter!("usecase_lookups_total", &labels).increment(1);
}
