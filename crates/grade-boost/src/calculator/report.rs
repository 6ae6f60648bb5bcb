use chrono::{DateTime, Utc};
use serde::Serialize;

use super::session::{SubmissionOutcome, SuggestionOutcome};
use crate::grading::{
    BandTone, CoercedComponents, GradeRequest, WeightSumError, REQUIRED_TOTAL_WEIGHT,
};

/// Response body for a completed submit cycle.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReport {
    pub final_grade: f64,
    pub display_grade: f64,
    pub label: &'static str,
    pub tone: BandTone,
    pub components: CoercedComponents,
    pub suggestions: Option<String>,
    pub suggestion_error: Option<String>,
    pub computed_at: DateTime<Utc>,
}

impl SubmissionReport {
    pub fn from_outcome(outcome: &SubmissionOutcome, computed_at: DateTime<Utc>) -> Self {
        let (suggestions, suggestion_error) = match &outcome.suggestions {
            SuggestionOutcome::Ready(text) => (Some(text.clone()), None),
            SuggestionOutcome::Failed { notice } => (None, Some(notice.clone())),
            SuggestionOutcome::Pending => (None, None),
        };

        Self {
            final_grade: outcome.result.final_grade,
            display_grade: outcome.result.display_grade(),
            label: outcome.band.label(),
            tone: outcome.band.tone(),
            components: outcome.result.components,
            suggestions,
            suggestion_error,
            computed_at,
        }
    }
}

/// Running total shown next to the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTotalView {
    pub total_weight: f64,
    pub required_total: f64,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WeightTotalView {
    pub fn for_request(request: &GradeRequest) -> Self {
        let total_weight = request.total_weight();
        let is_valid = total_weight == REQUIRED_TOTAL_WEIGHT;
        Self {
            total_weight,
            required_total: REQUIRED_TOTAL_WEIGHT,
            is_valid,
            message: (!is_valid).then(|| "Total must be 100% to calculate.".to_string()),
        }
    }
}

/// Error body for a rejected submission.
#[derive(Debug, Clone, Serialize)]
pub struct WeightSumErrorView {
    pub error: String,
    pub required_total: f64,
    pub actual_total: f64,
}

impl From<&WeightSumError> for WeightSumErrorView {
    fn from(err: &WeightSumError) -> Self {
        Self {
            error: err.to_string(),
            required_total: err.required(),
            actual_total: err.actual,
        }
    }
}
