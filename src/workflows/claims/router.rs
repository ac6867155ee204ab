use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::ClaimAssessment;
use super::service::{AssessmentRequest, ClaimTriageService};

/// Router builder exposing the assessment endpoint for the HTTP layer.
pub fn claims_router(service: Arc<ClaimTriageService>) -> Router {
    Router::new()
        .route("/api/v1/claims/assessments", post(assess_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) assessed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) assessment: ClaimAssessment,
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<ClaimTriageService>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    let assessment = service.assess(&request);
    let payload = AssessmentResponse {
        assessed_at: Utc::now(),
        assessment,
    };
    (StatusCode::OK, axum::Json(payload)).into_response()
}
