/// Resend email sending service
use crate::constants::PROVIDER_SEND_PATH;
use crate::error::RelayError;
use crate::models::{OutboundEmail, SendReceipt};
use crate::services::provider::EmailProvider;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// Error body returned by Resend on non-2xx responses
#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Human-readable detail for a rejected send
///
/// A body that cannot be read is reported as such rather than dropped.
fn error_detail<E: std::fmt::Display>(body: Result<String, E>) -> String {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to read Resend error body");
            return format!("unreadable error body: {}", e);
        }
    };

    match serde_json::from_str::<ResendErrorBody>(&body) {
        Ok(ResendErrorBody {
            name: Some(name),
            message: Some(message),
        }) => format!("{}: {}", name, message),
        Ok(ResendErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => body,
    }
}

pub struct ResendProvider {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl ResendProvider {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, RelayError> {
        let endpoint = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            PROVIDER_SEND_PATH
        ))
        .map_err(|e| RelayError::Config(format!("Invalid provider URL {}: {}", base_url, e)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, RelayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let receipt: SendReceipt = response.json().await.map_err(|e| {
                RelayError::Provider(format!("Unreadable Resend response: {}", e))
            })?;
            tracing::debug!(id = ?receipt.id, "Resend accepted email");
            return Ok(receipt);
        }

        let detail = error_detail(response.text().await);
        Err(RelayError::Provider(format!(
            "Resend returned {}: {}",
            status.as_u16(),
            detail
        )))
    }
}
