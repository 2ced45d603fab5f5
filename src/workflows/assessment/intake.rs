use super::domain::{Feature, QuestionnaireAnswers};

/// Validation errors raised before any scoring runs.
///
/// A missing field already fails JSON deserialization at the router boundary,
/// so intake only has to police declared ranges. Out-of-range answers are
/// rejected rather than silently clamped to zero: a malformed submission
/// should never be scored as "lowest severity".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{feature} is {value}, outside its declared range 0-{max}")]
    OutOfRange {
        feature: &'static str,
        value: u8,
        max: u8,
    },
}

/// Check every answer against its declared range, reporting the first
/// violation.
pub fn validate_answers(answers: &QuestionnaireAnswers) -> Result<(), ValidationError> {
    for feature in Feature::ordered() {
        let value = answers.value(feature);
        let max = feature.declared_max();
        if value > max {
            return Err(ValidationError::OutOfRange {
                feature: feature.label(),
                value,
                max,
            });
        }
    }
    Ok(())
}
