/// Contact form relay endpoint
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use contact_relay_core::constants::ENV_API_KEY;
use contact_relay_core::models::{ContactSubmission, Outcome};
use contact_relay_core::utils::logging::{email_domain, redact_body, redact_email};
use std::sync::Arc;
use tracing::info;

use crate::{context::RelayContext, error::ApiError};

/// Relay handler
///
/// Serves every path: the function is mounted at a single URL by the platform.
pub async fn relay(
    State(ctx): State<Arc<RelayContext>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS && ctx.config.answer_preflight {
        return StatusCode::NO_CONTENT.into_response();
    }

    match process(&ctx, &method, body).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) => {
            err.log();
            err.into_response()
        }
    }
}

async fn process(
    ctx: &RelayContext,
    method: &Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Outcome, ApiError> {
    let provider = ctx
        .provider()
        .ok_or_else(|| ApiError::MissingConfiguration(format!("{} is not set", ENV_API_KEY)))?;

    if *method != Method::POST {
        return Err(ApiError::MethodNotAllowed(method.to_string()));
    }

    let body = body.map_err(|e| ApiError::Internal(format!("Failed to read body: {}", e)))?;
    let raw = ContactSubmission::from_slice(&body)?;
    let submission = raw.validate()?;

    info!(
        from = %redact_email(submission.email),
        message = %redact_body(submission.message),
        "Relaying contact form submission"
    );

    let email = ctx.composer.compose(&submission);
    let receipt = provider.send(&email).await?;

    info!(
        id = receipt.id.as_deref().unwrap_or("none"),
        recipient_domain = %email_domain(&ctx.config.recipient),
        "Email sent successfully"
    );

    Ok(Outcome::sent(receipt.id))
}
