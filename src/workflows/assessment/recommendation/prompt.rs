use std::fmt::Write as _;

use super::super::domain::{Feature, QuestionnaireAnswers, StressClass};

/// Anxiety score above which a distress assessment must mention professional
/// help.
pub const ANXIETY_ESCALATION_THRESHOLD: u8 = 14;
/// Depression score above which the same escalation applies.
pub const DEPRESSION_ESCALATION_THRESHOLD: u8 = 18;

/// System and user messages sent to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBundle {
    pub system: String,
    pub user: String,
}

/// Whether the prompt must carry the mandatory professional-help clause.
///
/// Applies only to distress assessments with at least one severe marker.
pub fn needs_escalation(class: StressClass, answers: &QuestionnaireAnswers) -> bool {
    class == StressClass::Distress
        && (answers.anxiety_level > ANXIETY_ESCALATION_THRESHOLD
            || answers.depression > DEPRESSION_ESCALATION_THRESHOLD
            || answers.mental_health_history == 1)
}

/// Build the structured prompt: class label, every raw answer with its
/// declared range, and the fixed response policy.
pub fn build_prompt(class: StressClass, answers: &QuestionnaireAnswers) -> PromptBundle {
    let mut system = String::with_capacity(1024);
    system.push_str(
        "You are a professional psychologist specializing in student wellbeing. \
         Based on a stress self-assessment, give the student personal recommendations.\n\n",
    );
    let _ = writeln!(system, "Assessment result: {}", class.display_label());
    system.push_str("\nQuestionnaire answers:\n");
    for feature in Feature::ordered() {
        let _ = writeln!(
            system,
            "- {}: {}/{}",
            feature.label(),
            answers.value(feature),
            feature.declared_max()
        );
    }
    system.push_str(
        "\nRespond with 3-5 practical, concrete bullet recommendations. \
         Be empathetic and constructive. Do not diagnose any condition.\n",
    );
    if needs_escalation(class, answers) {
        system.push_str(
            "The answers show severe markers: you must explicitly recommend \
             seeking professional help from a counselor or psychologist.\n",
        );
    }

    PromptBundle {
        system,
        user: "Analyze my answers and give me personal recommendations.".to_string(),
    }
}
