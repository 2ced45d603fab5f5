use std::sync::Arc;

use tracing::info;

use super::domain::{QuestionnaireAnswers, StressAssessment};
use super::intake::{validate_answers, ValidationError};
use super::recommendation::{RecommendationProvider, TextCompletionBackend};
use super::repository::{NewResponse, RepositoryError, ResponseRepository, StoredResponse};
use super::scoring::{ScoringConfig, ScoringEngine};

/// Service composing intake validation, the scoring engine, the
/// recommendation chain, and the response store.
pub struct AssessmentService<R, B> {
    repository: Arc<R>,
    provider: RecommendationProvider<B>,
    engine: ScoringEngine,
}

impl<R, B> AssessmentService<R, B>
where
    R: ResponseRepository + 'static,
    B: TextCompletionBackend + 'static,
{
    pub fn new(
        repository: Arc<R>,
        provider: RecommendationProvider<B>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            repository,
            provider,
            engine: ScoringEngine::new(config),
        }
    }

    /// Score a submission, obtain recommendation text, and persist the
    /// result.
    ///
    /// Scoring and recommendation never fail past this point: the only error
    /// paths are a rejected submission and a store failure. A store failure
    /// still carries the computed assessment so the caller can show it while
    /// reporting that nothing was saved.
    pub async fn assess(
        &self,
        user_id: &str,
        answers: QuestionnaireAnswers,
    ) -> Result<AssessmentOutcome, AssessmentError> {
        validate_answers(&answers)?;

        let breakdown = self.engine.score(&answers);
        let recommendation = self
            .provider
            .recommend(breakdown.stress_class, &answers)
            .await;

        info!(
            user = user_id,
            class = breakdown.stress_class.label(),
            score = breakdown.decision_score,
            source = ?recommendation.source,
            "assessment scored"
        );

        let assessment = StressAssessment {
            stress_class: breakdown.stress_class,
            decision_score: breakdown.decision_score,
            probabilities: breakdown.probabilities,
            recommendations: recommendation.text,
            recommendation_source: recommendation.source,
        };

        let submission = NewResponse {
            user_id: user_id.to_string(),
            answers,
            assessment: assessment.clone(),
        };

        match self.repository.insert(submission) {
            Ok(record) => Ok(AssessmentOutcome { assessment, record }),
            Err(source) => Err(AssessmentError::Persistence {
                assessment: Box::new(assessment),
                source,
            }),
        }
    }

    /// Persisted history for a user, newest first.
    pub fn history(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<StoredResponse>, RepositoryError> {
        self.repository.history(user_id, limit)
    }
}

/// Successful submission: the assessment plus its persisted record.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentOutcome {
    pub assessment: StressAssessment,
    pub record: StoredResponse,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("assessment computed but not saved: {source}")]
    Persistence {
        assessment: Box<StressAssessment>,
        #[source]
        source: RepositoryError,
    },
}
