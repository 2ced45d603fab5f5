use std::collections::BTreeMap;

use super::super::domain::{Feature, QuestionnaireAnswers};

/// Feature vector rescaled onto [0, 1].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedFeatures {
    values: BTreeMap<Feature, f32>,
}

impl NormalizedFeatures {
    /// Normalized value for a feature; a feature absent from the vector reads
    /// as 0.0.
    pub fn get(&self, feature: Feature) -> f32 {
        self.values.get(&feature).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f32)> + '_ {
        self.values.iter().map(|(feature, value)| (*feature, *value))
    }
}

/// Rescale raw answers onto the common [0, 1] scale.
///
/// Each value becomes `clamp(raw / declared_max, 0, 1)`. Intake has already
/// rejected out-of-range submissions, but the clamp keeps this function total
/// so it can never produce a value outside the unit interval. Pure and
/// deterministic.
pub fn normalize(answers: &QuestionnaireAnswers) -> NormalizedFeatures {
    let values = Feature::ordered()
        .into_iter()
        .map(|feature| {
            let scaled = f32::from(answers.value(feature)) / f32::from(feature.declared_max());
            (feature, scaled.clamp(0.0, 1.0))
        })
        .collect();

    NormalizedFeatures { values }
}
