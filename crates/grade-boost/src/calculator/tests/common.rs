use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::grading::{ComponentInput, GradeRequest};
use crate::suggestions::{ProviderError, SuggestionClient, SuggestionProvider};

pub(super) const ADVICE: &str = "Spend more time on final exam practice problems.";

pub(super) fn balanced_request() -> GradeRequest {
    GradeRequest::new(
        ComponentInput::weighted(30.0, 80.0).expect("valid"),
        ComponentInput::weighted(30.0, 90.0).expect("valid"),
        ComponentInput::weighted(40.0, 70.0).expect("valid"),
    )
}

pub(super) fn short_weight_request() -> GradeRequest {
    GradeRequest::new(
        ComponentInput::weighted(30.0, 80.0).expect("valid"),
        ComponentInput::weighted(30.0, 90.0).expect("valid"),
        ComponentInput::weighted(30.0, 70.0).expect("valid"),
    )
}

#[derive(Default)]
pub(super) struct AdviceProvider {
    pub(super) calls: AtomicUsize,
}

#[async_trait]
impl SuggestionProvider for AdviceProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::json!({ "suggestions": ADVICE }).to_string())
    }

    fn name(&self) -> &str {
        "advice"
    }
}

#[derive(Default)]
pub(super) struct OfflineProvider {
    pub(super) calls: AtomicUsize,
}

#[async_trait]
impl SuggestionProvider for OfflineProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Transport("connection refused".to_string()))
    }

    fn name(&self) -> &str {
        "offline"
    }
}

pub(super) fn advice_client() -> SuggestionClient<AdviceProvider> {
    SuggestionClient::new(AdviceProvider::default())
}

pub(super) fn offline_client() -> SuggestionClient<OfflineProvider> {
    SuggestionClient::new(OfflineProvider::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
