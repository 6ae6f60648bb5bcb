use serde::Serialize;

use super::band::{classify, GradeBand};
use super::domain::{CoercedComponents, GradeRequest};

pub const REQUIRED_TOTAL_WEIGHT: f64 = 100.0;

/// The configured weights do not add up to exactly 100%.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("The total weight must be exactly 100%. Current total: {actual}%.")]
pub struct WeightSumError {
    pub actual: f64,
}

impl WeightSumError {
    pub fn required(&self) -> f64 {
        REQUIRED_TOTAL_WEIGHT
    }
}

/// Immutable outcome of a grade computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeResult {
    pub final_grade: f64,
    pub components: CoercedComponents,
}

impl GradeResult {
    /// Grade rounded to one decimal place for display.
    pub fn display_grade(&self) -> f64 {
        (self.final_grade * 10.0).round() / 10.0
    }

    pub fn band(&self) -> GradeBand {
        classify(self.final_grade)
    }
}

/// Stateless weighted-average calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct GradeEngine;

impl GradeEngine {
    pub fn new() -> Self {
        Self
    }

    /// Weights must sum to exactly 100. No epsilon is applied.
    pub fn validate(&self, request: &GradeRequest) -> Result<(), WeightSumError> {
        let actual = request.total_weight();
        if actual == REQUIRED_TOTAL_WEIGHT {
            Ok(())
        } else {
            Err(WeightSumError { actual })
        }
    }

    pub fn compute_grade(&self, request: &GradeRequest) -> Result<GradeResult, WeightSumError> {
        self.validate(request)?;

        let components = request.coerced();
        let parts = [components.homework, components.midterm, components.final_exam];
        let weighted_total: f64 = parts
            .iter()
            .map(|component| component.score * component.weight)
            .sum();
        // Clamp only absorbs float error; the weighted average is already within [0, 100].
        let final_grade =
            (weighted_total / REQUIRED_TOTAL_WEIGHT).clamp(0.0, REQUIRED_TOTAL_WEIGHT);

        Ok(GradeResult {
            final_grade,
            components,
        })
    }

    pub fn classify(&self, grade: f64) -> GradeBand {
        classify(grade)
    }
}
