use std::sync::Arc;

use async_trait::async_trait;

/// Capability that turns a rendered prompt into the provider's raw structured text.
///
/// Implementations only move bytes; schema validation happens in
/// [`SuggestionClient`](super::SuggestionClient).
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    fn name(&self) -> &str;
}

#[async_trait]
impl<T> SuggestionProvider for Arc<T>
where
    T: SuggestionProvider + ?Sized,
{
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        (**self).generate(prompt).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Failure raised by a provider implementation.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("suggestion provider is not configured: {0}")]
    NotConfigured(String),
    #[error("suggestion provider transport failed: {0}")]
    Transport(String),
    #[error("suggestion provider responded with status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("suggestion provider returned an unexpected envelope: {0}")]
    InvalidEnvelope(String),
}

/// Stand-in used when no credential is configured; every call fails.
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredProvider;

#[async_trait]
impl SuggestionProvider for UnconfiguredProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::NotConfigured(
            "set GEMINI_API_KEY to enable suggestions".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}
