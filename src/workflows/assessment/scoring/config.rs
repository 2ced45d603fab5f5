use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::Feature;

/// Scoring configuration: per-feature weights plus the strategy mapping the
/// weighted sum onto class thresholds.
///
/// Weights are domain constants tuned by the wellbeing team, not learned
/// parameters. They live here as data so a deployment can adjust them without
/// code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: BTreeMap<Feature, f32>,
    pub strategy: ScoreStrategy,
}

/// Interchangeable score-to-class mappings observed across model revisions.
///
/// Each variant carries its own threshold pair because the two score spaces
/// are not comparable: the raw sum ranges over roughly [-8.9, 12.2] with the
/// reference weights, while the sigmoid squashes it into (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScoreStrategy {
    /// Raw weighted sum compared against two thresholds. Default.
    WeightedSum { low: f32, high: f32 },
    /// Weighted sum passed through a logistic squash before thresholding.
    Sigmoid { low: f32, high: f32 },
}

impl ScoreStrategy {
    pub const fn thresholds(self) -> (f32, f32) {
        match self {
            Self::WeightedSum { low, high } | Self::Sigmoid { low, high } => (low, high),
        }
    }
}

/// Reference weight table, grouped by feature category.
///
/// Positive weights push toward distress, negative weights are protective.
const REFERENCE_WEIGHTS: [(Feature, f32); 20] = [
    // psychological
    (Feature::AnxietyLevel, 2.0),
    (Feature::SelfEsteem, -1.5),
    (Feature::MentalHealthHistory, 1.0),
    (Feature::Depression, 2.0),
    // physiological
    (Feature::Headache, 0.8),
    (Feature::BloodPressure, 0.5),
    (Feature::SleepQuality, -1.2),
    (Feature::BreathingProblem, 0.6),
    // environmental
    (Feature::NoiseLevel, 0.7),
    (Feature::LivingConditions, -0.8),
    (Feature::Safety, -1.0),
    (Feature::BasicNeeds, -1.0),
    // academic
    (Feature::AcademicPerformance, -0.9),
    (Feature::StudyLoad, 1.1),
    (Feature::TeacherStudentRelationship, -0.8),
    (Feature::FutureCareerConcerns, 1.0),
    // social
    (Feature::SocialSupport, -1.3),
    (Feature::PeerPressure, 0.9),
    (Feature::ExtracurricularActivities, -0.4),
    (Feature::Bullying, 1.6),
];

impl ScoringConfig {
    /// Reference configuration: raw weighted sum, class boundaries at 0.0 and
    /// 3.5. A fully neutral submission (all answers at their minimum) scores
    /// exactly 0.0 and lands in the no-stress class.
    pub fn reference() -> Self {
        Self {
            weights: REFERENCE_WEIGHTS.into_iter().collect(),
            strategy: ScoreStrategy::WeightedSum {
                low: 0.0,
                high: 3.5,
            },
        }
    }

    /// Reference weights behind the sigmoid alternative. A zero raw sum maps
    /// to exactly 0.5, which the left-inclusive low threshold keeps in the
    /// no-stress class.
    pub fn reference_sigmoid() -> Self {
        Self {
            strategy: ScoreStrategy::Sigmoid {
                low: 0.5,
                high: 0.78,
            },
            ..Self::reference()
        }
    }

    /// Weight for a feature; unconfigured features contribute nothing.
    pub fn weight(&self, feature: Feature) -> f32 {
        self.weights.get(&feature).copied().unwrap_or(0.0)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::reference()
    }
}
