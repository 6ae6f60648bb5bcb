use chrono::Utc;

use super::report::{SubmissionReport, WeightTotalView};
use super::session::CalculatorSession;
use crate::grading::{GradeRequest, WeightSumError};
use crate::suggestions::{SuggestionClient, SuggestionProvider};

/// Stateless facade used by the HTTP routes; every call runs its own cycle.
pub struct GradeCalculatorService<P> {
    client: SuggestionClient<P>,
}

impl<P> GradeCalculatorService<P>
where
    P: SuggestionProvider + 'static,
{
    pub fn new(client: SuggestionClient<P>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SuggestionClient<P> {
        &self.client
    }

    /// Computes the grade and requests suggestions for it.
    pub async fn submit(&self, request: GradeRequest) -> Result<SubmissionReport, WeightSumError> {
        let mut session = CalculatorSession::with_form(request);
        let outcome = session.submit(&self.client).await?;
        Ok(SubmissionReport::from_outcome(&outcome, Utc::now()))
    }

    pub fn total(&self, request: &GradeRequest) -> WeightTotalView {
        WeightTotalView::for_request(request)
    }
}
