use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Instant};
use tracing::{info, warn, Instrument};

use super::Metrics;

/// Releases the in-flight slot even when the request future is dropped
struct InFlightGuard {
    metrics: Arc<Metrics>,
    method: String,
    endpoint: String,
}

impl InFlightGuard {
    fn acquire(metrics: Arc<Metrics>, method: &str, endpoint: &str) -> Self {
        metrics.increment_in_flight(method, endpoint);
        Self {
            metrics,
            method: method.to_string(),
            endpoint: endpoint.to_string(),
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.metrics.decrement_in_flight(&self.method, &self.endpoint);
    }
}

/// Per-request span, in-flight gauge, latency histogram and completion log
pub async fn observability_middleware(
    State(metrics): State<Arc<Metrics>>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();

    // Group by route template so `/categories/:category/:id` is one series
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let request_id = request
        .headers()
        .get(crate::handlers::middleware::REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let span_name = format!("{} {}", method, endpoint);
    let span = tracing::info_span!(
        target: "celebrations_rs::http",
        "request",
        otel.name = %span_name,
        otel.kind = "server",
        http.method = %method,
        http.route = %endpoint,
        // Path only; query strings may carry form input
        http.target = %request.uri().path(),
        request_id = %request_id,
        http.status_code = tracing::field::Empty,
        http.response_time_ms = tracing::field::Empty,
    );

    async move {
        let in_flight = InFlightGuard::acquire(metrics.clone(), &method, &endpoint);

        let response = next.run(request).await;
        drop(in_flight);

        let duration = start_time.elapsed();
        let status_code = response.status().as_u16();

        let current = tracing::Span::current();
        current.record("http.status_code", status_code);
        current.record("http.response_time_ms", duration.as_millis() as u64);

        metrics.record_http_request(&method, &endpoint, status_code, duration.as_secs_f64());

        if status_code >= 500 {
            warn!(
                method = %method,
                path = %endpoint,
                status_code,
                duration_ms = duration.as_millis() as u64,
                "Request failed"
            );
        } else {
            info!(
                method = %method,
                path = %endpoint,
                status_code,
                duration_ms = duration.as_millis() as u64,
                "Request completed"
            );
        }

        response
    }
    .instrument(span)
    .await
}
