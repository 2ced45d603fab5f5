mod classifier;
mod config;
mod normalizer;

pub use config::{ScoreStrategy, ScoringConfig};
pub use normalizer::{normalize, NormalizedFeatures};

use serde::{Deserialize, Serialize};

use super::domain::{
    Feature, FeatureCategory, PseudoProbabilities, QuestionnaireAnswers, StressClass,
};

/// Stateless scorer applying the configured weights and strategy to a
/// validated answer sheet.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a submission: normalize, weight, map through the configured
    /// strategy, and classify. Pure apart from the configuration captured at
    /// construction.
    pub fn score(&self, answers: &QuestionnaireAnswers) -> ScoreBreakdown {
        let normalized = normalize(answers);

        let mut components = Vec::with_capacity(Feature::ordered().len());
        let mut raw_score = 0.0_f32;
        for (feature, value) in normalized.iter() {
            let weight = self.config.weight(feature);
            let contribution = value * weight;
            raw_score += contribution;
            components.push(ScoreComponent {
                feature,
                category: feature.category(),
                normalized: value,
                weight,
                contribution,
            });
        }

        let decision_score = match self.config.strategy {
            ScoreStrategy::WeightedSum { .. } => raw_score,
            ScoreStrategy::Sigmoid { .. } => sigmoid(raw_score),
        };
        let (low, high) = self.config.strategy.thresholds();
        let stress_class = classifier::classify(decision_score, low, high);
        let probabilities = classifier::pseudo_probabilities(stress_class);

        ScoreBreakdown {
            raw_score,
            decision_score,
            stress_class,
            probabilities,
            components,
        }
    }
}

fn sigmoid(value: f32) -> f32 {
    1.0 / (1.0 + (-value).exp())
}

/// Contribution of a single feature, kept so assessments can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub feature: Feature,
    pub category: FeatureCategory,
    pub normalized: f32,
    pub weight: f32,
    pub contribution: f32,
}

/// Full scoring result before recommendation text is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted sum over normalized features, before any squashing.
    pub raw_score: f32,
    /// Score in the strategy's decision space, compared against thresholds.
    pub decision_score: f32,
    pub stress_class: StressClass,
    pub probabilities: PseudoProbabilities,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    /// Summed contribution per category, in catalog order.
    pub fn category_totals(&self) -> Vec<(FeatureCategory, f32)> {
        FeatureCategory::ordered()
            .into_iter()
            .map(|category| {
                let total = self
                    .components
                    .iter()
                    .filter(|component| component.category == category)
                    .map(|component| component.contribution)
                    .sum();
                (category, total)
            })
            .collect()
    }
}
