//! Stress self-assessment workflow: intake validation, weighted scoring,
//! recommendation generation with a static fallback, and append-only
//! persistence of results.

pub mod domain;
pub mod intake;
pub mod recommendation;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Feature, FeatureCategory, PseudoProbabilities, QuestionnaireAnswers, RecommendationSource,
    StressAssessment, StressClass,
};
pub use intake::ValidationError;
pub use recommendation::{
    GenAiGateway, PromptBundle, ProviderError, Recommendation, RecommendationProvider,
    TextCompletionBackend,
};
pub use repository::{
    InMemoryResponseStore, NewResponse, RepositoryError, ResponseRepository, StoredResponse,
};
pub use router::{assessment_router, AssessmentView, SubmitRequest};
pub use scoring::{ScoreBreakdown, ScoreComponent, ScoreStrategy, ScoringConfig, ScoringEngine};
pub use service::{AssessmentError, AssessmentOutcome, AssessmentService};
