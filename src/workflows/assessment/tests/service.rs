use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::workflows::assessment::domain::{RecommendationSource, StressClass};
use crate::workflows::assessment::recommendation::RecommendationProvider;
use crate::workflows::assessment::service::{AssessmentError, AssessmentService};

#[tokio::test]
async fn assess_persists_one_immutable_record() {
    let (service, repository) = template_service();

    let outcome = service
        .assess("student-17", moderate_answers())
        .await
        .expect("assessment succeeds");

    assert_eq!(repository.len(), 1);
    assert_eq!(outcome.record.user_id, "student-17");
    assert_eq!(outcome.record.answers, moderate_answers());
    assert_eq!(outcome.record.assessment, outcome.assessment);
    assert_eq!(outcome.assessment.stress_class, StressClass::Eustress);
}

#[tokio::test]
async fn out_of_range_submission_is_rejected_before_scoring() {
    let (service, repository) = template_service();

    let mut answers = moderate_answers();
    answers.depression = 30;

    match service.assess("student-17", answers).await {
        Err(AssessmentError::Validation(error)) => {
            assert!(error.to_string().contains("depression"));
        }
        other => panic!("expected validation rejection, got {other:?}"),
    }
    assert!(repository.is_empty(), "nothing may be stored");
}

#[tokio::test]
async fn persistence_failure_still_carries_the_assessment() {
    let service = AssessmentService::new(
        Arc::new(UnavailableStore),
        RecommendationProvider::<StaticBackend>::disabled(),
        scoring_config(),
    );

    match service.assess("student-17", crisis_answers()).await {
        Err(AssessmentError::Persistence { assessment, source }) => {
            assert_eq!(assessment.stress_class, StressClass::Distress);
            assert!(!assessment.recommendations.is_empty());
            assert!(source.to_string().contains("database offline"));
        }
        other => panic!("expected persistence error, got {other:?}"),
    }
}

#[tokio::test]
async fn generated_text_is_stored_with_its_source() {
    let (service, repository) =
        service_with_backend(StaticBackend::with_text("Plan one rest day per week."));

    let outcome = service
        .assess("student-42", moderate_answers())
        .await
        .expect("assessment succeeds");

    assert_eq!(
        outcome.assessment.recommendation_source,
        RecommendationSource::Generated
    );
    assert_eq!(
        outcome.assessment.recommendations,
        "Plan one rest day per week."
    );
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn history_is_per_user_and_newest_first() {
    let (service, _) = template_service();

    service
        .assess("student-a", calm_answers())
        .await
        .expect("first submission");
    service
        .assess("student-a", moderate_answers())
        .await
        .expect("second submission");
    service
        .assess("student-b", crisis_answers())
        .await
        .expect("other user");

    let history = service.history("student-a", 50).expect("history loads");
    assert_eq!(history.len(), 2);
    assert!(history
        .iter()
        .all(|record| record.user_id == "student-a"));
    assert!(history[0].created_at >= history[1].created_at);

    let capped = service.history("student-a", 1).expect("history loads");
    assert_eq!(capped.len(), 1);
}

#[tokio::test]
async fn slow_provider_does_not_block_persistence() {
    let repository = Arc::new(crate::workflows::assessment::InMemoryResponseStore::default());
    let service = AssessmentService::new(
        repository.clone(),
        RecommendationProvider::new(
            SlowBackend {
                delay: Duration::from_secs(3600),
            },
            Duration::from_millis(50),
        ),
        scoring_config(),
    );

    let outcome = service
        .assess("student-17", crisis_answers())
        .await
        .expect("falls back and persists");

    assert_eq!(
        outcome.assessment.recommendation_source,
        RecommendationSource::FallbackTemplate
    );
    assert_eq!(repository.len(), 1);
}
