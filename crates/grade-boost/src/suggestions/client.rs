use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::provider::{ProviderError, SuggestionProvider};
use super::request::SuggestionRequest;
use crate::grading::GradeRequest;

/// Shape the provider's output must conform to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    pub suggestions: String,
}

/// The suggestion round trip failed; the computed grade is unaffected.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionFetchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("suggestion response did not match the expected schema: {0}")]
    Schema(String),
    #[error("suggestion response contained no advice")]
    Empty,
    #[error("suggestion request timed out after {0:?}")]
    TimedOut(Duration),
}

impl SuggestionFetchError {
    pub const NOTICE: &'static str = "Could not fetch suggestions. Please try again.";

    /// User-facing message; the variant detail is only meant for logs.
    pub fn notice(&self) -> &'static str {
        Self::NOTICE
    }
}

/// Issues exactly one provider call per request, bounded by a timeout.
pub struct SuggestionClient<P> {
    provider: P,
    timeout: Duration,
}

impl<P> SuggestionClient<P>
where
    P: SuggestionProvider,
{
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(provider: P) -> Self {
        Self {
            provider,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn request_suggestions(
        &self,
        final_grade: f64,
        components: &GradeRequest,
    ) -> Result<String, SuggestionFetchError> {
        let request = SuggestionRequest::new(final_grade, components);
        self.send(&request).await
    }

    pub async fn send(&self, request: &SuggestionRequest) -> Result<String, SuggestionFetchError> {
        let prompt = request.render_prompt();
        let raw = tokio::time::timeout(self.timeout, self.provider.generate(&prompt))
            .await
            .map_err(|_| SuggestionFetchError::TimedOut(self.timeout))??;

        parse_suggestions(&raw).map_err(|err| {
            warn!(
                provider = self.provider.name(),
                error = %err,
                "discarding non-conforming suggestion response"
            );
            err
        })
    }
}

pub(crate) fn parse_suggestions(raw: &str) -> Result<String, SuggestionFetchError> {
    let body = strip_code_fence(raw.trim());
    let payload: SuggestionPayload =
        serde_json::from_str(body).map_err(|err| SuggestionFetchError::Schema(err.to_string()))?;

    if payload.suggestions.trim().is_empty() {
        return Err(SuggestionFetchError::Empty);
    }
    Ok(payload.suggestions)
}

// Some models wrap JSON output in a markdown fence even when asked not to.
fn strip_code_fence(raw: &str) -> &str {
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
