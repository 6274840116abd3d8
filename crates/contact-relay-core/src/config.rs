/// Relay configuration - loaded from environment variables
use crate::constants::*;
use crate::error::RelayError;
use lettre::message::Mailbox;
use url::Url;

/// Configuration is read once at cold start and is immutable for the Lambda lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Provider credential. `None` is reported per request, not at startup.
    pub api_key: Option<String>,
    pub sender: String,
    pub recipient: String,
    pub provider_url: String,
    pub site_name: String,
    /// Answer OPTIONS preflight with 204 instead of 405
    pub answer_preflight: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            sender: DEFAULT_SENDER.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            answer_preflight: false,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        let config = Self {
            api_key: get(ENV_API_KEY),
            sender: get(ENV_SENDER).unwrap_or(defaults.sender),
            recipient: get(ENV_RECIPIENT).unwrap_or(defaults.recipient),
            provider_url: get(ENV_PROVIDER_URL).unwrap_or(defaults.provider_url),
            site_name: get(ENV_SITE_NAME).unwrap_or(defaults.site_name),
            answer_preflight: get(ENV_ANSWER_PREFLIGHT)
                .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true"))
                .unwrap_or(false),
        };

        config.validate()?;

        if config.api_key.is_none() {
            tracing::warn!("{} is not set; every request will be rejected", ENV_API_KEY);
        }
        tracing::info!(
            recipient_domain = %crate::utils::logging::email_domain(&config.recipient),
            provider_url = %config.provider_url,
            answer_preflight = config.answer_preflight,
            "Configuration validated successfully"
        );

        Ok(config)
    }

    /// Validates addresses and the provider URL
    pub fn validate(&self) -> Result<(), RelayError> {
        self.sender
            .parse::<Mailbox>()
            .map_err(|e| RelayError::Config(format!("Invalid {}: {}", ENV_SENDER, e)))?;

        self.recipient
            .parse::<Mailbox>()
            .map_err(|e| RelayError::Config(format!("Invalid {}: {}", ENV_RECIPIENT, e)))?;

        let url = Url::parse(&self.provider_url)
            .map_err(|e| RelayError::Config(format!("Invalid {}: {}", ENV_PROVIDER_URL, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RelayError::Config(format!(
                "Invalid {}: unsupported scheme {}",
                ENV_PROVIDER_URL,
                url.scheme()
            )));
        }

        Ok(())
    }
}
