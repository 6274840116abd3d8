/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contact_relay_core::RelayError;
use contact_relay_core::constants::*;
use contact_relay_core::models::Outcome;
use tracing::{error, warn};

/// API Error
///
/// The `Display` text carries internal detail for the logs; the response body
/// only ever contains the fixed public message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Missing fields: {0}")]
    MissingFields(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Provider send failed: {0}")]
    Provider(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingConfiguration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingConfiguration(_) => MSG_MISCONFIGURED,
            ApiError::MethodNotAllowed(_) => MSG_METHOD_NOT_ALLOWED,
            ApiError::MissingFields(_) => MSG_FIELDS_REQUIRED,
            ApiError::InvalidEmail(_) => MSG_INVALID_EMAIL,
            ApiError::Provider(_) => MSG_INTERNAL_ERROR,
            ApiError::Internal(_) => MSG_INTERNAL_ERROR,
        }
    }

    pub fn log(&self) {
        if self.status().is_server_error() {
            error!(status = self.status().as_u16(), error = %self, "Contact relay failed");
        } else {
            warn!(status = self.status().as_u16(), error = %self, "Contact relay rejected request");
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(Outcome::failure(self.public_message()));
        (self.status(), body).into_response()
    }
}

/// Convert core errors to API errors
impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::MissingFields(fields) => ApiError::MissingFields(fields),
            RelayError::InvalidEmail(detail) => ApiError::InvalidEmail(detail),
            RelayError::Provider(detail) => ApiError::Provider(detail),
            RelayError::Http(detail) => ApiError::Provider(detail),
            err @ (RelayError::MalformedPayload(_) | RelayError::Config(_)) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}
