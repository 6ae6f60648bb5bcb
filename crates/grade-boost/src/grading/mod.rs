//! Pure grade computation: input types, the weight-sum check, and banding.

mod band;
pub mod domain;
mod engine;

#[cfg(test)]
mod tests;

pub use band::{classify, BandTone, GradeBand};
pub use domain::{
    CoercedComponent, CoercedComponents, ComponentInput, ComponentKind, GradeForm, GradeRequest,
    InputError, Percentage,
};
pub use engine::{GradeEngine, GradeResult, WeightSumError, REQUIRED_TOTAL_WEIGHT};
