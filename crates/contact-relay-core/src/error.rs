/// Error types for the contact relay
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}

impl RelayError {
    /// Whether the error was caused by the submitted input rather than the server
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::MissingFields(_) => true,
            Self::InvalidEmail(_) => true,
            // Parse failures are reported like any other server-side failure
            Self::MalformedPayload(_) => false,
            Self::Config(_) => false,
            Self::Provider(_) => false,
            Self::Http(_) => false,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
