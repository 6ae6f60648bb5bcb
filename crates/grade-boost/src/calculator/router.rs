use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::report::WeightSumErrorView;
use super::service::GradeCalculatorService;
use crate::grading::{GradeForm, GradeRequest};
use crate::suggestions::SuggestionProvider;

/// Router builder exposing the grade calculation endpoints.
pub fn calculator_router<P>(service: Arc<GradeCalculatorService<P>>) -> Router
where
    P: SuggestionProvider + 'static,
{
    Router::new()
        .route("/api/v1/grades", post(submit_handler::<P>))
        .route("/api/v1/grades/total", post(total_handler::<P>))
        .with_state(service)
}

pub(crate) async fn submit_handler<P>(
    State(service): State<Arc<GradeCalculatorService<P>>>,
    Json(form): Json<GradeForm>,
) -> Response
where
    P: SuggestionProvider + 'static,
{
    match service.submit(GradeRequest::from(form)).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => {
            let payload = WeightSumErrorView::from(&err);
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn total_handler<P>(
    State(service): State<Arc<GradeCalculatorService<P>>>,
    Json(form): Json<GradeForm>,
) -> Response
where
    P: SuggestionProvider + 'static,
{
    let view = service.total(&GradeRequest::from(form));
    (StatusCode::OK, Json(view)).into_response()
}
