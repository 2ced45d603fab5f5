use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;
use tokio::time::sleep;

use crate::workflows::assessment::domain::QuestionnaireAnswers;
use crate::workflows::assessment::recommendation::{
    PromptBundle, ProviderError, RecommendationProvider, TextCompletionBackend,
};
use crate::workflows::assessment::repository::{
    InMemoryResponseStore, NewResponse, RepositoryError, ResponseRepository, StoredResponse,
};
use crate::workflows::assessment::scoring::ScoringConfig;
use crate::workflows::assessment::service::AssessmentService;

/// Every answer at its minimum: the fully neutral sheet.
pub(super) fn calm_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        anxiety_level: 0,
        self_esteem: 0,
        mental_health_history: 0,
        depression: 0,
        headache: 0,
        blood_pressure: 0,
        sleep_quality: 0,
        breathing_problem: 0,
        noise_level: 0,
        living_conditions: 0,
        safety: 0,
        basic_needs: 0,
        academic_performance: 0,
        study_load: 0,
        teacher_student_relationship: 0,
        future_career_concerns: 0,
        social_support: 0,
        peer_pressure: 0,
        extracurricular_activities: 0,
        bullying: 0,
    }
}

/// An activating but manageable load: lands in eustress with the reference
/// weights.
pub(super) fn moderate_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        anxiety_level: 7,
        self_esteem: 15,
        mental_health_history: 0,
        depression: 9,
        headache: 0,
        blood_pressure: 0,
        sleep_quality: 3,
        breathing_problem: 0,
        noise_level: 0,
        living_conditions: 0,
        safety: 3,
        basic_needs: 0,
        academic_performance: 0,
        study_load: 4,
        teacher_student_relationship: 0,
        future_career_concerns: 4,
        social_support: 3,
        peer_pressure: 4,
        extracurricular_activities: 0,
        bullying: 2,
    }
}

/// Worst-case sheet: severe instrument scores, no protective factors.
pub(super) fn crisis_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        anxiety_level: 21,
        self_esteem: 0,
        mental_health_history: 1,
        depression: 27,
        headache: 5,
        blood_pressure: 5,
        sleep_quality: 0,
        breathing_problem: 5,
        noise_level: 5,
        living_conditions: 0,
        safety: 0,
        basic_needs: 0,
        academic_performance: 0,
        study_load: 5,
        teacher_student_relationship: 0,
        future_career_concerns: 5,
        social_support: 0,
        peer_pressure: 5,
        extracurricular_activities: 0,
        bullying: 5,
    }
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::reference()
}

/// Backend stub resolving to a fixed completion.
#[derive(Clone)]
pub(super) struct StaticBackend {
    pub(super) text: String,
}

impl StaticBackend {
    pub(super) fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl TextCompletionBackend for StaticBackend {
    fn complete(
        &self,
        _prompt: PromptBundle,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send {
        let text = self.text.clone();
        async move { Ok(text) }
    }
}

/// Backend stub simulating the documented failure classes.
#[derive(Clone, Copy)]
pub(super) enum FailureMode {
    Transport,
    UpstreamStatus(u16),
    Malformed,
}

pub(super) struct FailingBackend {
    pub(super) mode: FailureMode,
}

impl TextCompletionBackend for FailingBackend {
    fn complete(
        &self,
        _prompt: PromptBundle,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send {
        let mode = self.mode;
        async move {
            Err(match mode {
                FailureMode::Transport => {
                    ProviderError::Transport("connection refused".to_string())
                }
                FailureMode::UpstreamStatus(code) => ProviderError::UpstreamStatus { code },
                FailureMode::Malformed => {
                    ProviderError::MalformedResponse("unexpected shape".to_string())
                }
            })
        }
    }
}

/// Backend stub that never answers within a sane timeout.
pub(super) struct SlowBackend {
    pub(super) delay: Duration,
}

impl TextCompletionBackend for SlowBackend {
    fn complete(
        &self,
        _prompt: PromptBundle,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send {
        let delay = self.delay;
        async move {
            sleep(delay).await;
            Ok("too late".to_string())
        }
    }
}

/// Store stub that fails every operation.
pub(super) struct UnavailableStore;

impl ResponseRepository for UnavailableStore {
    fn insert(&self, _response: NewResponse) -> Result<StoredResponse, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn history(
        &self,
        _user_id: &str,
        _limit: usize,
    ) -> Result<Vec<StoredResponse>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Service with no external backend: recommendations come from templates.
pub(super) fn template_service() -> (
    AssessmentService<InMemoryResponseStore, StaticBackend>,
    Arc<InMemoryResponseStore>,
) {
    let repository = Arc::new(InMemoryResponseStore::default());
    let service = AssessmentService::new(
        repository.clone(),
        RecommendationProvider::disabled(),
        scoring_config(),
    );
    (service, repository)
}

pub(super) fn service_with_backend<B>(
    backend: B,
) -> (
    AssessmentService<InMemoryResponseStore, B>,
    Arc<InMemoryResponseStore>,
)
where
    B: TextCompletionBackend + 'static,
{
    let repository = Arc::new(InMemoryResponseStore::default());
    let service = AssessmentService::new(
        repository.clone(),
        RecommendationProvider::new(backend, Duration::from_secs(5)),
        scoring_config(),
    );
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
