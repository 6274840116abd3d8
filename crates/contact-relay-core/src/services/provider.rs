/// Email provider abstraction
use crate::error::RelayError;
use crate::models::{OutboundEmail, SendReceipt};
use async_trait::async_trait;

/// Transactional email service that accepts one email per call
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, RelayError>;
}
