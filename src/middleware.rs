use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::metrics;

/// Request tracking middleware
///
/// Wraps the book routes and drives both metrics: the request counter is
/// incremented before the handler runs (so rejected requests are counted
/// too), the duration histogram is recorded after the response is ready.
/// The endpoint label is the matched route template, falling back to the
/// raw path when no route matched.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    metrics::record_request(method.as_str(), &endpoint);

    let start = Instant::now();
    let response = next.run(req).await;

    metrics::record_duration(
        method.as_str(),
        &endpoint,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}
