
use super::{ComponentInput, GradeRequest};

pub(super) fn request(weights: [f64; 3], scores: [f64; 3]) -> GradeRequest {
    GradeRequest::new(
        ComponentInput::weighted(weights[0], scores[0]).expect("valid homework"),
        ComponentInput::weighted(weights[1], scores[1]).expect("valid midterm"),
        ComponentInput::weighted(weights[2], scores[2]).expect("valid final exam"),
    )
}
