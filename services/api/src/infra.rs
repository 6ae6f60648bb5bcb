use grade_boost::config::SuggestionConfig;
use grade_boost::suggestions::{
    GeminiProvider, ProviderError, SuggestionClient, SuggestionProvider, UnconfiguredProvider,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

pub(crate) type SharedProvider = Arc<dyn SuggestionProvider>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Picks the Gemini provider when a key is configured; otherwise every fetch fails
/// while grades are still computed.
pub(crate) fn suggestion_provider(
    config: &SuggestionConfig,
) -> Result<SharedProvider, ProviderError> {
    if !config.is_configured() {
        warn!("no suggestion provider credential configured; suggestions will be unavailable");
        return Ok(Arc::new(UnconfiguredProvider));
    }
    Ok(Arc::new(GeminiProvider::from_config(config)?))
}

pub(crate) fn suggestion_client(
    config: &SuggestionConfig,
) -> Result<SuggestionClient<SharedProvider>, ProviderError> {
    let provider = suggestion_provider(config)?;
    Ok(SuggestionClient::new(provider).with_timeout(config.timeout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_unconfigured_provider_without_key() {
        let provider = suggestion_provider(&SuggestionConfig::default()).expect("builds");
        assert_eq!(provider.name(), "unconfigured");
    }

    #[test]
    fn uses_gemini_when_key_present() {
        let config = SuggestionConfig {
            api_key: Some("key".to_string()),
            ..SuggestionConfig::default()
        };
        let client = suggestion_client(&config).expect("builds");
        assert_eq!(client.provider().name(), "gemini");
    }
}
