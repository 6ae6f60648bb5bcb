//! End-to-end coverage of the submit cycle, exercised through the public session,
//! service, and router facades.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use grade_boost::calculator::{
    calculator_router, CalculatorSession, GradeCalculatorService, SubmitPhase,
};
use grade_boost::grading::{ComponentInput, GradeEngine, GradeRequest};
use grade_boost::suggestions::{
    GeminiProvider, ProviderError, SuggestionClient, SuggestionFetchError, SuggestionProvider,
    SuggestionRequest,
};

fn components(weights: [f64; 3], scores: [f64; 3]) -> GradeRequest {
    GradeRequest::new(
        ComponentInput::weighted(weights[0], scores[0]).expect("valid homework"),
        ComponentInput::weighted(weights[1], scores[1]).expect("valid midterm"),
        ComponentInput::weighted(weights[2], scores[2]).expect("valid final exam"),
    )
}

struct RecordingProvider {
    prompts: Mutex<Vec<String>>,
    reply: Result<String, String>,
}

impl RecordingProvider {
    fn replying(text: &str) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply: Ok(json!({ "suggestions": text }).to_string()),
        }
    }

    fn failing() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            reply: Err("service unavailable".to_string()),
        }
    }
}

#[async_trait]
impl SuggestionProvider for RecordingProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.to_string());
        self.reply
            .clone()
            .map_err(|body| ProviderError::Upstream { status: 503, body })
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn mixed_weights_grade_and_fetch_advice() {
    let client = SuggestionClient::new(RecordingProvider::replying("Review midterm topics."));
    let mut session =
        CalculatorSession::with_form(components([30.0, 30.0, 40.0], [80.0, 90.0, 70.0]));

    let outcome = session.submit(&client).await.expect("weights sum to 100");

    assert!((outcome.result.final_grade - 79.0).abs() < 1e-9);
    assert_eq!(outcome.band.label(), "Good");
    assert_eq!(outcome.suggestions.text(), Some("Review midterm topics."));

    let prompts = client.provider().prompts.lock().expect("prompt mutex poisoned");
    assert_eq!(prompts.len(), 1);
    for line in [
        "Final Grade: 79",
        "Homework Weight: 30",
        "Homework Score: 80",
        "Midterm Weight: 30",
        "Midterm Score: 90",
        "Final Exam Weight: 40",
        "Final Exam Score: 70",
    ] {
        assert!(prompts[0].contains(line), "prompt missing '{line}'");
    }
}

#[test]
fn zero_weight_midterm_contributes_nothing() {
    let result = GradeEngine::new()
        .compute_grade(&components([50.0, 0.0, 50.0], [100.0, 0.0, 60.0]))
        .expect("weights sum to 100");

    assert!((result.final_grade - 80.0).abs() < 1e-9);
    assert_eq!(result.band().label(), "Great Job");
}

#[tokio::test]
async fn ninety_percent_total_is_rejected_without_fetching() {
    let client = SuggestionClient::new(RecordingProvider::replying("unused"));
    let mut session =
        CalculatorSession::with_form(components([30.0, 30.0, 30.0], [80.0, 90.0, 70.0]));

    let err = session.submit(&client).await.expect_err("sum is 90");

    assert_eq!(err.actual, 90.0);
    assert_eq!(session.phase(), SubmitPhase::Idle);
    assert!(client
        .provider()
        .prompts
        .lock()
        .expect("prompt mutex poisoned")
        .is_empty());
}

#[tokio::test]
async fn fetch_failure_keeps_grade_and_surfaces_notice() {
    let client = SuggestionClient::new(RecordingProvider::failing());
    let mut session =
        CalculatorSession::with_form(components([30.0, 30.0, 40.0], [80.0, 90.0, 70.0]));

    let outcome = session.submit(&client).await.expect("grade still computed");

    assert!((outcome.result.final_grade - 79.0).abs() < 1e-9);
    assert_eq!(outcome.band.label(), "Good");
    assert!(outcome.suggestions.text().is_none());
    assert_eq!(
        outcome.suggestions.notice(),
        Some(SuggestionFetchError::NOTICE)
    );
    assert_eq!(session.phase(), SubmitPhase::Done);
}

#[test]
fn suggestion_request_is_reproducible_from_inputs() {
    let request = components([30.0, 30.0, 40.0], [80.0, 90.0, 70.0]);
    let grade = GradeEngine::new()
        .compute_grade(&request)
        .expect("valid")
        .final_grade;

    let first = SuggestionRequest::new(grade, &request);
    let second = SuggestionRequest::new(grade, &request);

    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
    assert_eq!(first.render_prompt(), second.render_prompt());
}

async fn fake_gemini(Json(request): Json<Value>) -> Json<Value> {
    let prompt = request["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let advice = if prompt.contains("Final Grade: 79") {
        "Prioritise the final exam; it carries the most weight."
    } else {
        "Keep going."
    };
    Json(json!({
        "candidates": [{
            "content": { "parts": [{ "text": json!({ "suggestions": advice }).to_string() }] },
            "finishReason": "STOP"
        }]
    }))
}

#[tokio::test]
async fn http_submission_through_gemini_provider() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake gemini");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, Router::new().fallback(fake_gemini))
            .await
            .expect("fake gemini serves");
    });

    let provider = GeminiProvider::new(
        "integration-key",
        "gemini-test",
        format!("http://{addr}"),
        Duration::from_secs(5),
    )
    .expect("provider builds");
    let service = GradeCalculatorService::new(SuggestionClient::new(provider));
    let router = calculator_router(Arc::new(service));

    let response = router
        .oneshot(
            Request::post("/api/v1/grades")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "homework_weight": 30, "homework_score": 80,
                        "midterm_weight": 30, "midterm_score": 90,
                        "final_exam_weight": 40, "final_exam_score": 70
                    })
                    .to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let body: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(body["label"], "Good");
    assert_eq!(
        body["suggestions"],
        "Prioritise the final exam; it carries the most weight."
    );
}
