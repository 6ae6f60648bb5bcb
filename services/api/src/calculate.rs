use crate::infra::suggestion_client;
use clap::Args;
use grade_boost::calculator::{CalculatorSession, SubmissionOutcome, SuggestionOutcome};
use grade_boost::config::AppConfig;
use grade_boost::error::AppError;
use grade_boost::grading::{ComponentInput, GradeRequest, Percentage};
use std::fmt::Write as _;

#[derive(Args, Debug, Default)]
pub(crate) struct CalculateArgs {
    /// Homework weight as a percentage (0-100)
    #[arg(long)]
    pub(crate) homework_weight: Option<Percentage>,
    /// Homework score out of 100
    #[arg(long)]
    pub(crate) homework_score: Option<Percentage>,
    /// Midterm weight as a percentage (0-100)
    #[arg(long)]
    pub(crate) midterm_weight: Option<Percentage>,
    /// Midterm score out of 100
    #[arg(long)]
    pub(crate) midterm_score: Option<Percentage>,
    /// Final exam weight as a percentage (0-100)
    #[arg(long)]
    pub(crate) final_exam_weight: Option<Percentage>,
    /// Final exam score out of 100
    #[arg(long)]
    pub(crate) final_exam_score: Option<Percentage>,
}

impl CalculateArgs {
    pub(crate) fn grade_request(&self) -> GradeRequest {
        GradeRequest::new(
            ComponentInput::new(self.homework_weight, self.homework_score),
            ComponentInput::new(self.midterm_weight, self.midterm_score),
            ComponentInput::new(self.final_exam_weight, self.final_exam_score),
        )
    }
}

pub(crate) async fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let client = suggestion_client(&config.suggestions)?;

    let mut session = CalculatorSession::with_form(args.grade_request());
    println!("Total weight: {}%", session.total_weight());

    let outcome = session.submit(&client).await?;
    print!("{}", render_outcome(&outcome));
    Ok(())
}

pub(crate) fn render_outcome(outcome: &SubmissionOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Final grade: {:.1}% ({})",
        outcome.result.final_grade,
        outcome.band.label()
    );

    let components = &outcome.result.components;
    for (label, component) in [
        ("Homework", components.homework),
        ("Midterm", components.midterm),
        ("Final Exam", components.final_exam),
    ] {
        let _ = writeln!(
            out,
            "  {label:<10} weight {:>5}%  score {:>5}",
            component.weight, component.score
        );
    }

    let _ = writeln!(out, "\nGrade-boost suggestions");
    match &outcome.suggestions {
        SuggestionOutcome::Ready(text) => {
            let _ = writeln!(out, "{text}");
        }
        SuggestionOutcome::Failed { notice } => {
            let _ = writeln!(out, "  {notice}");
        }
        SuggestionOutcome::Pending => {
            let _ = writeln!(out, "  (pending)");
        }
    }
    out
}
