use serde::Serialize;
use tracing::{debug, warn};

use crate::grading::{
    ComponentKind, GradeBand, GradeEngine, GradeRequest, GradeResult, Percentage, WeightSumError,
};
use crate::suggestions::{
    SuggestionClient, SuggestionFetchError, SuggestionProvider, SuggestionRequest,
};

/// Position of the session within a submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPhase {
    #[default]
    Idle,
    Computing,
    RequestingSuggestions,
    Done,
}

/// State of the advisory text for the current cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Pending,
    Ready(String),
    Failed { notice: String },
}

impl SuggestionOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            SuggestionOutcome::Ready(text) => Some(text),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            SuggestionOutcome::Failed { notice } => Some(notice),
            _ => None,
        }
    }
}

/// What the presentation layer shows for one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub result: GradeResult,
    pub band: GradeBand,
    pub suggestions: SuggestionOutcome,
}

/// Ticket for the suggestion request of one cycle.
#[derive(Debug, Clone)]
pub struct PendingSuggestions {
    cycle: u64,
    result: GradeResult,
    band: GradeBand,
    request: SuggestionRequest,
}

impl PendingSuggestions {
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn result(&self) -> &GradeResult {
        &self.result
    }

    pub fn request(&self) -> &SuggestionRequest {
        &self.request
    }

    fn resolve(&self, fetched: Result<String, SuggestionFetchError>) -> SubmissionOutcome {
        let suggestions = match fetched {
            Ok(text) => SuggestionOutcome::Ready(text),
            Err(err) => {
                warn!(cycle = self.cycle, error = %err, "suggestion fetch failed");
                SuggestionOutcome::Failed {
                    notice: err.notice().to_string(),
                }
            }
        };

        SubmissionOutcome {
            result: self.result,
            band: self.band,
            suggestions,
        }
    }
}

/// Form state plus the single current-result slot for one user.
///
/// Each submission starts a new cycle and overwrites the slot. Completions carrying an
/// older cycle number are dropped.
#[derive(Debug, Default)]
pub struct CalculatorSession {
    form: GradeRequest,
    phase: SubmitPhase,
    cycle: u64,
    current: Option<SubmissionOutcome>,
    engine: GradeEngine,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: GradeRequest) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &GradeRequest {
        &self.form
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn current(&self) -> Option<&SubmissionOutcome> {
        self.current.as_ref()
    }

    pub fn total_weight(&self) -> f64 {
        self.form.total_weight()
    }

    pub fn set_weight(&mut self, kind: ComponentKind, weight: Option<Percentage>) {
        self.form.set_weight(kind, weight);
    }

    pub fn set_score(&mut self, kind: ComponentKind, score: Option<Percentage>) {
        self.form.set_score(kind, score);
    }

    /// Clears one component's fields; the displayed result is left alone.
    pub fn clear_component(&mut self, kind: ComponentKind) {
        self.form.clear(kind);
    }

    /// Resets every field and the result slot, returning to `Idle`.
    pub fn clear_all(&mut self) {
        self.form.clear_all();
        self.current = None;
        self.phase = SubmitPhase::Idle;
        self.cycle += 1;
    }

    /// Validates and computes the grade, leaving the session in `RequestingSuggestions`.
    ///
    /// On a weight-sum failure nothing changes and the error is returned to the caller.
    pub fn begin_submit(&mut self) -> Result<PendingSuggestions, WeightSumError> {
        if let Err(err) = self.engine.validate(&self.form) {
            warn!(total_weight = err.actual, "submission rejected");
            return Err(err);
        }

        self.phase = SubmitPhase::Computing;
        self.cycle += 1;
        self.current = None;

        let result = self.engine.compute_grade(&self.form)?;
        let band = self.engine.classify(result.final_grade);
        debug!(
            cycle = self.cycle,
            final_grade = result.final_grade,
            band = band.label(),
            "grade computed"
        );

        self.current = Some(SubmissionOutcome {
            result,
            band,
            suggestions: SuggestionOutcome::Pending,
        });
        self.phase = SubmitPhase::RequestingSuggestions;

        Ok(PendingSuggestions {
            cycle: self.cycle,
            result,
            band,
            request: SuggestionRequest::from_result(&result),
        })
    }

    /// Applies a suggestion outcome if `pending` still belongs to the current cycle.
    pub fn complete(
        &mut self,
        pending: &PendingSuggestions,
        fetched: Result<String, SuggestionFetchError>,
    ) -> Option<SubmissionOutcome> {
        if !self.is_current(pending) {
            debug!(
                stale_cycle = pending.cycle,
                current_cycle = self.cycle,
                "discarding stale suggestion outcome"
            );
            return None;
        }

        let outcome = pending.resolve(fetched);
        self.current = Some(outcome.clone());
        self.phase = SubmitPhase::Done;
        Some(outcome)
    }

    /// Runs a full cycle: compute, request suggestions once, and settle.
    pub async fn submit<P>(
        &mut self,
        client: &SuggestionClient<P>,
    ) -> Result<SubmissionOutcome, WeightSumError>
    where
        P: SuggestionProvider,
    {
        let pending = self.begin_submit()?;
        let fetched = client.send(pending.request()).await;
        let outcome = pending.resolve(fetched);

        self.current = Some(outcome.clone());
        self.phase = SubmitPhase::Done;
        Ok(outcome)
    }

    fn is_current(&self, pending: &PendingSuggestions) -> bool {
        pending.cycle == self.cycle && self.phase == SubmitPhase::RequestingSuggestions
    }
}
