use std::collections::BTreeMap;

use super::common::*;
use crate::workflows::assessment::domain::{Feature, StressClass};
use crate::workflows::assessment::scoring::{
    normalize, NormalizedFeatures, ScoreStrategy, ScoringConfig, ScoringEngine,
};

#[test]
fn normalized_values_stay_in_unit_interval() {
    for answers in [calm_answers(), moderate_answers(), crisis_answers()] {
        let normalized = normalize(&answers);
        for (feature, value) in normalized.iter() {
            assert!(
                (0.0..=1.0).contains(&value),
                "{} normalized to {value}",
                feature.label()
            );
        }
    }
}

#[test]
fn normalizer_uses_per_feature_scales() {
    let normalized = normalize(&crisis_answers());
    assert_eq!(normalized.get(Feature::AnxietyLevel), 1.0);
    assert_eq!(normalized.get(Feature::Depression), 1.0);
    assert_eq!(normalized.get(Feature::MentalHealthHistory), 1.0);

    let normalized = normalize(&moderate_answers());
    assert!((normalized.get(Feature::SelfEsteem) - 0.5).abs() < 1e-6);
    assert!((normalized.get(Feature::StudyLoad) - 0.8).abs() < 1e-6);
}

#[test]
fn absent_features_normalize_to_zero() {
    let empty = NormalizedFeatures::default();
    assert_eq!(empty.get(Feature::Bullying), 0.0);
}

#[test]
fn neutral_sheet_scores_exactly_zero_and_stays_no_stress() {
    let engine = ScoringEngine::new(scoring_config());
    let breakdown = engine.score(&calm_answers());

    assert_eq!(breakdown.raw_score, 0.0);
    assert_eq!(breakdown.decision_score, 0.0);
    // 0.0 sits exactly on the low breakpoint; left-inclusive keeps it class 0.
    assert_eq!(breakdown.stress_class, StressClass::NoStress);
}

#[test]
fn moderate_sheet_lands_in_eustress() {
    let engine = ScoringEngine::new(scoring_config());
    let breakdown = engine.score(&moderate_answers());

    assert_eq!(breakdown.stress_class, StressClass::Eustress);
    assert!(breakdown.raw_score > 0.0);
}

#[test]
fn crisis_sheet_lands_in_distress() {
    let engine = ScoringEngine::new(scoring_config());
    let breakdown = engine.score(&crisis_answers());

    assert_eq!(breakdown.stress_class, StressClass::Distress);
    assert!(breakdown.raw_score > 3.5);
}

#[test]
fn scoring_is_deterministic() {
    let engine = ScoringEngine::new(scoring_config());
    let first = engine.score(&moderate_answers());
    let second = engine.score(&moderate_answers());
    assert_eq!(first, second);
}

#[test]
fn sigmoid_strategy_squashes_into_unit_interval() {
    let engine = ScoringEngine::new(ScoringConfig::reference_sigmoid());

    let calm = engine.score(&calm_answers());
    assert!((calm.decision_score - 0.5).abs() < 1e-6);
    assert_eq!(calm.stress_class, StressClass::NoStress);

    let crisis = engine.score(&crisis_answers());
    assert!(crisis.decision_score > 0.78 && crisis.decision_score < 1.0);
    assert_eq!(crisis.stress_class, StressClass::Distress);
}

#[test]
fn strategies_agree_on_the_extremes() {
    let raw = ScoringEngine::new(ScoringConfig::reference());
    let squashed = ScoringEngine::new(ScoringConfig::reference_sigmoid());

    for answers in [calm_answers(), crisis_answers()] {
        assert_eq!(
            raw.score(&answers).stress_class,
            squashed.score(&answers).stress_class
        );
    }
}

#[test]
fn unconfigured_features_contribute_nothing() {
    let config = ScoringConfig {
        weights: BTreeMap::new(),
        strategy: ScoreStrategy::WeightedSum {
            low: 0.0,
            high: 3.5,
        },
    };
    let engine = ScoringEngine::new(config);

    let breakdown = engine.score(&crisis_answers());
    assert_eq!(breakdown.raw_score, 0.0);
    assert_eq!(breakdown.stress_class, StressClass::NoStress);
}

#[test]
fn breakdown_reports_category_totals() {
    let engine = ScoringEngine::new(scoring_config());
    let breakdown = engine.score(&crisis_answers());

    let totals = breakdown.category_totals();
    assert_eq!(totals.len(), 5);

    let psychological = totals
        .iter()
        .find(|(category, _)| category.label() == "psychological")
        .map(|(_, total)| *total)
        .expect("psychological category present");
    // Max anxiety, max depression, history flag, zero self-esteem.
    assert!((psychological - 5.0).abs() < 1e-5);
}

#[test]
fn pseudo_probabilities_favor_the_predicted_class() {
    let engine = ScoringEngine::new(scoring_config());
    let breakdown = engine.score(&crisis_answers());

    let probabilities = breakdown.probabilities;
    assert_eq!(probabilities.percent_for(StressClass::Distress), 80);
    assert_eq!(probabilities.percent_for(StressClass::NoStress), 10);
    assert_eq!(probabilities.percent_for(StressClass::Eustress), 10);
}
