use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static CONTENT_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "portal_content_operations_total",
        "Content operations by resource, operation and outcome",
        &["resource", "operation", "outcome"]
    )
    .expect("register content_operations_total")
});

pub static LOGIN_ATTEMPTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "portal_login_attempts_total",
        "Login attempts by outcome",
        &["outcome"]
    )
    .expect("register login_attempts_total")
});

pub fn record_content_op(resource: &str, operation: &str, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    CONTENT_OPERATIONS_TOTAL
        .with_label_values(&[resource, operation, outcome])
        .inc();
}

pub fn record_login(ok: bool) {
    LOGIN_ATTEMPTS_TOTAL
        .with_label_values(&[if ok { "ok" } else { "rejected" }])
        .inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
