/// Relay Context - shared state for every invocation
use contact_relay_core::email::ContactEmailComposer;
use contact_relay_core::services::{EmailProvider, ResendProvider};
use contact_relay_core::{RelayConfig, RelayError};
use std::sync::Arc;

#[derive(Clone)]
pub struct RelayContext {
    pub config: RelayConfig,
    pub composer: ContactEmailComposer,
    /// Absent when no provider credential is configured
    provider: Option<Arc<dyn EmailProvider>>,
}

impl RelayContext {
    /// Create a context from the process environment
    pub fn new() -> Result<Arc<Self>, RelayError> {
        Self::from_config(RelayConfig::from_env()?)
    }

    /// Create a context talking to Resend with the configured credential
    pub fn from_config(config: RelayConfig) -> Result<Arc<Self>, RelayError> {
        let provider = match &config.api_key {
            Some(api_key) => Some(Arc::new(ResendProvider::new(
                api_key.clone(),
                &config.provider_url,
            )?) as Arc<dyn EmailProvider>),
            None => None,
        };

        Ok(Arc::new(Self {
            composer: ContactEmailComposer::new(&config),
            config,
            provider,
        }))
    }

    /// Create a context with a caller-supplied provider
    pub fn with_provider(config: RelayConfig, provider: Arc<dyn EmailProvider>) -> Arc<Self> {
        Arc::new(Self {
            composer: ContactEmailComposer::new(&config),
            config,
            provider: Some(provider),
        })
    }

    /// The provider, if the relay is fully configured
    pub fn provider(&self) -> Option<&dyn EmailProvider> {
        self.config.api_key.as_ref()?;
        self.provider.as_deref()
    }
}
