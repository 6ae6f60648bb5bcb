//! Submit-cycle orchestration over the grade engine and the suggestion client.

pub mod report;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use report::{SubmissionReport, WeightSumErrorView, WeightTotalView};
pub use router::calculator_router;
pub use service::GradeCalculatorService;
pub use session::{
    CalculatorSession, PendingSuggestions, SubmissionOutcome, SubmitPhase, SuggestionOutcome,
};
