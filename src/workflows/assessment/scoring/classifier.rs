use super::super::domain::{PseudoProbabilities, StressClass};

/// Pseudo-probability assigned to the predicted class.
const PREDICTED_CLASS_WEIGHT: f32 = 0.8;
/// Share given to each of the two remaining classes.
const OTHER_CLASS_WEIGHT: f32 = 0.1;

/// Map a decision score onto an ordinal stress class.
///
/// Both breakpoints are left-inclusive: a score exactly at `low` stays in the
/// no-stress class, a score exactly at `high` stays in eustress.
pub(crate) fn classify(score: f32, low: f32, high: f32) -> StressClass {
    if score <= low {
        StressClass::NoStress
    } else if score <= high {
        StressClass::Eustress
    } else {
        StressClass::Distress
    }
}

/// Fixed display-only confidence vector for a predicted class.
///
/// Not a calibrated distribution; see [`PseudoProbabilities`].
pub(crate) fn pseudo_probabilities(predicted: StressClass) -> PseudoProbabilities {
    let value = |class: StressClass| {
        if class == predicted {
            PREDICTED_CLASS_WEIGHT
        } else {
            OTHER_CLASS_WEIGHT
        }
    };

    PseudoProbabilities {
        no_stress: value(StressClass::NoStress),
        positive_stress: value(StressClass::Eustress),
        negative_stress: value(StressClass::Distress),
    }
}
