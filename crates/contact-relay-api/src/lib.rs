/// Contact Relay API - contact form Lambda
///
/// This crate adapts Lambda HTTP events to an axum router whose single
/// handler validates a contact form submission and relays it by email.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::RelayContext;
pub use error::ApiError;

use axum::{
    Router,
    body::Body as AxumBody,
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode, header},
    middleware as axum_middleware,
};
use contact_relay_core::constants::*;
use contact_relay_core::models::Outcome;
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::error;

/// Build the relay router
///
/// The CORS headers are set on every response, error responses included.
pub fn router(ctx: Arc<RelayContext>) -> Router {
    Router::new()
        .fallback(api::contact::relay)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(ctx)
}

/// Main Lambda handler - converts Lambda HTTP request to Axum router
pub async fn handler(
    ctx: Arc<RelayContext>,
    event: Request,
) -> Result<Response<Body>, LambdaError> {
    let app = router(ctx);

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let axum_request = http::Request::from_parts(parts, AxumBody::from(body.to_vec()));

    let response = match app.oneshot(axum_request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    let (parts, body) = response.into_parts();

    // Convert Axum response body to Lambda response body
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("Failed to read response body: {}", err);
            return Ok(internal_error_response());
        }
    };

    let body = match String::from_utf8(body_bytes.to_vec()) {
        Ok(text) if text.is_empty() => Body::Empty,
        Ok(text) => Body::Text(text),
        Err(err) => Body::Binary(err.into_bytes()),
    };

    Ok(Response::from_parts(parts, body))
}

/// Generic 500 used when the router's response cannot be converted
fn internal_error_response() -> Response<Body> {
    let body = serde_json::to_string(&Outcome::failure(MSG_INTERNAL_ERROR)).unwrap_or_default();

    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );

    response
}
