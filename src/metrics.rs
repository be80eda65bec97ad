//! Prometheus metrics for the token service.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

/// Tokens issued counter.
pub static TOKENS_ISSUED: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "ghost_token_tokens_issued_total",
        "Total number of admin tokens issued",
        &["route"]
    )
    .expect("Failed to register tokens_issued metric")
});

/// Failed token requests counter.
pub static TOKEN_FAILURES: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "ghost_token_failures_total",
        "Total number of failed token requests",
        &["route", "code"]
    )
    .expect("Failed to register token_failures metric")
});

/// Token build latency histogram.
pub static TOKEN_BUILD_LATENCY: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "ghost_token_build_latency_seconds",
        "Time spent building a token in seconds",
        &["route"],
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01]
    )
    .expect("Failed to register token_build_latency metric")
});

/// Record a token issuance.
pub fn record_token_issued(route: &str) {
    TOKENS_ISSUED.with_label_values(&[route]).inc();
}

/// Record a failed token request.
pub fn record_token_failure(route: &str, code: &str) {
    TOKEN_FAILURES.with_label_values(&[route, code]).inc();
}

/// Record token build latency.
pub fn record_build_latency(route: &str, duration_secs: f64) {
    TOKEN_BUILD_LATENCY
        .with_label_values(&[route])
        .observe(duration_secs);
}

/// Text exposition of every registered metric.
pub fn gather() -> Result<String, prometheus::Error> {
    let families = prometheus::gather();
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
