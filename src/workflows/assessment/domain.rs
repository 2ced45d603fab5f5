use serde::{Deserialize, Serialize};

/// Questionnaire features contributing to the stress score.
///
/// Most features are answered on the questionnaire's shared 0-5 scale; the
/// screening instruments (`AnxietyLevel`, `SelfEsteem`, `Depression`) and the
/// binary `MentalHealthHistory` carry their own declared ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    AnxietyLevel,
    SelfEsteem,
    MentalHealthHistory,
    Depression,
    Headache,
    BloodPressure,
    SleepQuality,
    BreathingProblem,
    NoiseLevel,
    LivingConditions,
    Safety,
    BasicNeeds,
    AcademicPerformance,
    StudyLoad,
    TeacherStudentRelationship,
    FutureCareerConcerns,
    SocialSupport,
    PeerPressure,
    ExtracurricularActivities,
    Bullying,
}

/// Default upper bound for features answered on the shared questionnaire scale.
pub const DEFAULT_FEATURE_MAX: u8 = 5;

impl Feature {
    pub const fn ordered() -> [Self; 20] {
        [
            Self::AnxietyLevel,
            Self::SelfEsteem,
            Self::MentalHealthHistory,
            Self::Depression,
            Self::Headache,
            Self::BloodPressure,
            Self::SleepQuality,
            Self::BreathingProblem,
            Self::NoiseLevel,
            Self::LivingConditions,
            Self::Safety,
            Self::BasicNeeds,
            Self::AcademicPerformance,
            Self::StudyLoad,
            Self::TeacherStudentRelationship,
            Self::FutureCareerConcerns,
            Self::SocialSupport,
            Self::PeerPressure,
            Self::ExtracurricularActivities,
            Self::Bullying,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AnxietyLevel => "anxiety_level",
            Self::SelfEsteem => "self_esteem",
            Self::MentalHealthHistory => "mental_health_history",
            Self::Depression => "depression",
            Self::Headache => "headache",
            Self::BloodPressure => "blood_pressure",
            Self::SleepQuality => "sleep_quality",
            Self::BreathingProblem => "breathing_problem",
            Self::NoiseLevel => "noise_level",
            Self::LivingConditions => "living_conditions",
            Self::Safety => "safety",
            Self::BasicNeeds => "basic_needs",
            Self::AcademicPerformance => "academic_performance",
            Self::StudyLoad => "study_load",
            Self::TeacherStudentRelationship => "teacher_student_relationship",
            Self::FutureCareerConcerns => "future_career_concerns",
            Self::SocialSupport => "social_support",
            Self::PeerPressure => "peer_pressure",
            Self::ExtracurricularActivities => "extracurricular_activities",
            Self::Bullying => "bullying",
        }
    }

    /// Declared maximum for the feature's answer range.
    ///
    /// GAD-7 style anxiety runs 0-21, Rosenberg self-esteem 0-30, PHQ-9 style
    /// depression 0-27, mental-health history is a 0/1 flag; everything else
    /// uses the shared questionnaire scale.
    pub const fn declared_max(self) -> u8 {
        match self {
            Self::AnxietyLevel => 21,
            Self::SelfEsteem => 30,
            Self::Depression => 27,
            Self::MentalHealthHistory => 1,
            _ => DEFAULT_FEATURE_MAX,
        }
    }

    pub const fn category(self) -> FeatureCategory {
        match self {
            Self::AnxietyLevel | Self::SelfEsteem | Self::MentalHealthHistory | Self::Depression => {
                FeatureCategory::Psychological
            }
            Self::Headache | Self::BloodPressure | Self::SleepQuality | Self::BreathingProblem => {
                FeatureCategory::Physiological
            }
            Self::NoiseLevel | Self::LivingConditions | Self::Safety | Self::BasicNeeds => {
                FeatureCategory::Environmental
            }
            Self::AcademicPerformance
            | Self::StudyLoad
            | Self::TeacherStudentRelationship
            | Self::FutureCareerConcerns => FeatureCategory::Academic,
            Self::SocialSupport
            | Self::PeerPressure
            | Self::ExtracurricularActivities
            | Self::Bullying => FeatureCategory::Social,
        }
    }
}

/// Grouping used when reporting per-feature contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    Psychological,
    Physiological,
    Environmental,
    Academic,
    Social,
}

impl FeatureCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Psychological,
            Self::Physiological,
            Self::Environmental,
            Self::Academic,
            Self::Social,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychological => "psychological",
            Self::Physiological => "physiological",
            Self::Environmental => "environmental",
            Self::Academic => "academic",
            Self::Social => "social",
        }
    }
}

/// Raw questionnaire submission, one answer per feature.
///
/// Every field is required on the wire; range checking happens in
/// [`crate::workflows::assessment::intake`] before any scoring runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    pub anxiety_level: u8,
    pub self_esteem: u8,
    pub mental_health_history: u8,
    pub depression: u8,
    pub headache: u8,
    pub blood_pressure: u8,
    pub sleep_quality: u8,
    pub breathing_problem: u8,
    pub noise_level: u8,
    pub living_conditions: u8,
    pub safety: u8,
    pub basic_needs: u8,
    pub academic_performance: u8,
    pub study_load: u8,
    pub teacher_student_relationship: u8,
    pub future_career_concerns: u8,
    pub social_support: u8,
    pub peer_pressure: u8,
    pub extracurricular_activities: u8,
    pub bullying: u8,
}

impl QuestionnaireAnswers {
    pub const fn value(&self, feature: Feature) -> u8 {
        match feature {
            Feature::AnxietyLevel => self.anxiety_level,
            Feature::SelfEsteem => self.self_esteem,
            Feature::MentalHealthHistory => self.mental_health_history,
            Feature::Depression => self.depression,
            Feature::Headache => self.headache,
            Feature::BloodPressure => self.blood_pressure,
            Feature::SleepQuality => self.sleep_quality,
            Feature::BreathingProblem => self.breathing_problem,
            Feature::NoiseLevel => self.noise_level,
            Feature::LivingConditions => self.living_conditions,
            Feature::Safety => self.safety,
            Feature::BasicNeeds => self.basic_needs,
            Feature::AcademicPerformance => self.academic_performance,
            Feature::StudyLoad => self.study_load,
            Feature::TeacherStudentRelationship => self.teacher_student_relationship,
            Feature::FutureCareerConcerns => self.future_career_concerns,
            Feature::SocialSupport => self.social_support,
            Feature::PeerPressure => self.peer_pressure,
            Feature::ExtracurricularActivities => self.extracurricular_activities,
            Feature::Bullying => self.bullying,
        }
    }
}

/// Ordinal stress classes produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressClass {
    NoStress,
    Eustress,
    Distress,
}

impl StressClass {
    pub const fn ordered() -> [Self; 3] {
        [Self::NoStress, Self::Eustress, Self::Distress]
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::NoStress => 0,
            Self::Eustress => 1,
            Self::Distress => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoStress => "no_stress",
            Self::Eustress => "positive_stress",
            Self::Distress => "negative_stress",
        }
    }

    pub const fn display_label(self) -> &'static str {
        match self {
            Self::NoStress => "No stress",
            Self::Eustress => "Positive stress",
            Self::Distress => "Negative stress",
        }
    }
}

/// Display-only confidence values attached to an assessment.
///
/// These are fixed presentation values (predicted class 0.8, the others 0.1
/// each), not a calibrated distribution; the questionnaire UI renders them as
/// percentages next to the class label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PseudoProbabilities {
    pub no_stress: f32,
    pub positive_stress: f32,
    pub negative_stress: f32,
}

impl PseudoProbabilities {
    pub fn value_for(&self, class: StressClass) -> f32 {
        match class {
            StressClass::NoStress => self.no_stress,
            StressClass::Eustress => self.positive_stress,
            StressClass::Distress => self.negative_stress,
        }
    }

    pub fn percent_for(&self, class: StressClass) -> u8 {
        (self.value_for(class) * 100.0).round() as u8
    }
}

/// Where the recommendation text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Produced by the external text-generation service.
    Generated,
    /// Static per-class template used when no provider is configured or the
    /// external call failed.
    FallbackTemplate,
}

/// Immutable assessment derived from one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAssessment {
    pub stress_class: StressClass,
    pub decision_score: f32,
    pub probabilities: PseudoProbabilities,
    pub recommendations: String,
    pub recommendation_source: RecommendationSource,
}

impl StressAssessment {
    /// Confidence shown to the caller, derived from the pseudo-probability of
    /// the predicted class.
    pub fn confidence_percent(&self) -> u8 {
        self.probabilities.percent_for(self.stress_class)
    }
}
