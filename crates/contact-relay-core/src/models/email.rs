/// Email models exchanged with the provider
use serde::{Deserialize, Serialize};

/// Email handed to the provider for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

/// Provider acknowledgement of an accepted email
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendReceipt {
    #[serde(default)]
    pub id: Option<String>,
}
