use serde::{Deserialize, Serialize};

use crate::grading::{GradeRequest, GradeResult};

/// Seven-field payload handed to the text-generation capability.
///
/// Every field is a plain number; absent inputs have already been coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub final_grade: f64,
    pub homework_weight: f64,
    pub homework_score: f64,
    pub midterm_weight: f64,
    pub midterm_score: f64,
    pub final_exam_weight: f64,
    pub final_exam_score: f64,
}

impl SuggestionRequest {
    pub fn new(final_grade: f64, components: &GradeRequest) -> Self {
        let coerced = components.coerced();
        Self {
            final_grade,
            homework_weight: coerced.homework.weight,
            homework_score: coerced.homework.score,
            midterm_weight: coerced.midterm.weight,
            midterm_score: coerced.midterm.score,
            final_exam_weight: coerced.final_exam.weight,
            final_exam_score: coerced.final_exam.score,
        }
    }

    pub fn from_result(result: &GradeResult) -> Self {
        let components = &result.components;
        Self {
            final_grade: result.final_grade,
            homework_weight: components.homework.weight,
            homework_score: components.homework.score,
            midterm_weight: components.midterm.weight,
            midterm_score: components.midterm.score,
            final_exam_weight: components.final_exam.weight,
            final_exam_score: components.final_exam.score,
        }
    }

    /// Renders the fixed advice prompt with each value interpolated verbatim.
    pub fn render_prompt(&self) -> String {
        format!(
            "You are an assistant that gives students personalized advice on how to raise their \
grade, based on how they performed in each component of a course.

Using the final grade together with the weight and score of the homework, midterm and final \
exam, give the student specific and actionable suggestions for each component.

Final Grade: {final_grade}
Homework Weight: {homework_weight}
Midterm Weight: {midterm_weight}
Final Exam Weight: {final_exam_weight}
Homework Score: {homework_score}
Midterm Score: {midterm_score}
Final Exam Score: {final_exam_score}

Reply with a JSON object containing a single string field named \"suggestions\".

Suggestions:
",
            final_grade = self.final_grade,
            homework_weight = self.homework_weight,
            midterm_weight = self.midterm_weight,
            final_exam_weight = self.final_exam_weight,
            homework_score = self.homework_score,
            midterm_score = self.midterm_score,
            final_exam_score = self.final_exam_score,
        )
    }
}
