use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics exporter
///
/// Installs the global recorder; call once at server startup. Tests build
/// their own recorder handles instead.
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();

    let handle = builder
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    init_metric_descriptions();

    handle
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "books_api_requests_total",
        "Total number of requests to the books API"
    );
    describe_histogram!(
        "http_request_duration_seconds",
        "Request duration in seconds"
    );
    describe_gauge!(
        "library_api_info",
        "Library API version and build information"
    );

    gauge!("library_api_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a request against a books endpoint
///
/// `endpoint` is the matched route template (`/books`, `/books/:id`), not
/// the raw request path.
pub fn record_request(method: &str, endpoint: &str) {
    counter!(
        "books_api_requests_total",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
    )
    .increment(1);
}

/// Record request duration and response status
pub fn record_duration(method: &str, endpoint: &str, status: u16, duration: Duration) {
    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string(),
    )
    .record(duration.as_secs_f64());
}
