/// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Request logging middleware
///
/// Logs every request with:
/// - Request ID (generated, attached to a span around the handler)
/// - HTTP method and path
/// - Response status code
/// - Request duration
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = info_span!("request", request_id = %request_id);

    info!(
        parent: &span,
        method = %method,
        path = %path,
        "Incoming request"
    );

    let response = next.run(request).instrument(span.clone()).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(
            parent: &span,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            parent: &span,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}
