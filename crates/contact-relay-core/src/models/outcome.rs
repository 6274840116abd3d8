/// Response body returned for every request
use crate::constants::MSG_SENT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Outcome {
    /// Successful relay, carrying the provider message id when there is one
    pub fn sent(id: Option<String>) -> Self {
        Self {
            success: true,
            message: MSG_SENT.to_string(),
            id,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}
