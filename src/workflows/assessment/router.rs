use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{QuestionnaireAnswers, StressAssessment};
use super::recommendation::TextCompletionBackend;
use super::repository::ResponseRepository;
use super::service::{AssessmentError, AssessmentService};

/// Number of history entries returned to the results UI.
const HISTORY_LIMIT: usize = 50;

/// Router builder exposing HTTP endpoints for submissions and history.
pub fn assessment_router<R, B>(service: Arc<AssessmentService<R, B>>) -> Router
where
    R: ResponseRepository + 'static,
    B: TextCompletionBackend + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<R, B>))
        .route(
            "/api/v1/assessments/:user_id/history",
            get(history_handler::<R, B>),
        )
        .with_state(service)
}

/// Inbound submission payload, matching the questionnaire UI contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub questionnaire_data: QuestionnaireAnswers,
    pub user_id: String,
}

/// Response payload for a scored submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentView {
    pub stress_level: &'static str,
    pub stress_class: u8,
    pub recommendations: String,
    pub confidence: u8,
    pub probabilities: ProbabilityView,
    pub persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pseudo-probabilities rendered as 0-100 integers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProbabilityView {
    pub no_stress: u8,
    pub positive_stress: u8,
    pub negative_stress: u8,
}

impl AssessmentView {
    pub fn from_assessment(assessment: &StressAssessment, persisted: bool) -> Self {
        let probabilities = &assessment.probabilities;
        Self {
            stress_level: assessment.stress_class.display_label(),
            stress_class: assessment.stress_class.code(),
            recommendations: assessment.recommendations.clone(),
            confidence: assessment.confidence_percent(),
            probabilities: ProbabilityView {
                no_stress: (probabilities.no_stress * 100.0).round() as u8,
                positive_stress: (probabilities.positive_stress * 100.0).round() as u8,
                negative_stress: (probabilities.negative_stress * 100.0).round() as u8,
            },
            persisted,
            error: None,
        }
    }
}

pub(crate) async fn submit_handler<R, B>(
    State(service): State<Arc<AssessmentService<R, B>>>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    R: ResponseRepository + 'static,
    B: TextCompletionBackend + 'static,
{
    match service
        .assess(&request.user_id, request.questionnaire_data)
        .await
    {
        Ok(outcome) => {
            let view = AssessmentView::from_assessment(&outcome.assessment, true);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentError::Persistence { assessment, source }) => {
            // The assessment is still returned so the client can render it
            // while reporting that nothing was saved.
            let mut view = AssessmentView::from_assessment(&assessment, false);
            view.error = Some(source.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(view)).into_response()
        }
    }
}

pub(crate) async fn history_handler<R, B>(
    State(service): State<Arc<AssessmentService<R, B>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ResponseRepository + 'static,
    B: TextCompletionBackend + 'static,
{
    match service.history(&user_id, HISTORY_LIMIT) {
        Ok(records) => {
            let entries: Vec<_> = records.iter().map(|record| record.history_view()).collect();
            (StatusCode::OK, axum::Json(entries)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
