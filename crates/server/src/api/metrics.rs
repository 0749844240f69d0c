//! Prometheus metrics recording.

use metrics::{counter, histogram};
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records one retrieval request's fan-out and fused result size.
pub fn record_retrieval(subquestions: usize, fused: usize) {
    counter!("resumerag_retrievals_total").increment(1);
    histogram!("resumerag_subquestions_per_request").record(subquestions as f64);
    histogram!("resumerag_fused_candidates").record(fused as f64);
}

/// Records a chat completion call by operation and outcome.
pub fn record_chat_call(operation: &str, outcome: &str) {
    counter!(
        "resumerag_chat_calls_total",
        "operation" => operation.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
}
