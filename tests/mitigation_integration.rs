//! Integration tests for the mitigation evaluator.
//!
//! Run with: cargo test --test mitigation_integration

mod common;

use approx::assert_relative_eq;
use impact_deflect::mitigation::{
    MitigationConstants, Strategy, StrategyDetails, evaluate_mitigations,
};
use impact_deflect::scenarios::SCENARIOS;

#[test]
fn test_reference_kinetic_example() {
    let report =
        evaluate_mitigations(&common::reference("ref"), &MitigationConstants::default()).unwrap();
    let best = report.best_kinetic().unwrap();

    // 3.6 × (10000 / 1.571e9) × 20000 ≈ 0.458 m/s
    assert_relative_eq!(best.delta_v_m_s, 0.458, max_relative = 1e-3);
    assert_eq!(best.success_probability, 0.95);
    assert!(matches!(
        best.details,
        StrategyDetails::KineticImpactor {
            impactor_mass_kg,
            min_lead_time_years,
        } if impactor_mass_kg == 10_000.0 && min_lead_time_years == 46.0
    ));
}

#[test]
fn test_every_candidate_is_ranked() {
    for preset in SCENARIOS {
        let report =
            evaluate_mitigations(&preset.to_scenario(), &MitigationConstants::default()).unwrap();

        assert_eq!(report.recommendations.len(), 9, "Preset '{}'", preset.id);
        for pair in report.recommendations.windows(2) {
            assert!(
                pair[0].effectiveness_score >= pair[1].effectiveness_score,
                "Preset '{}' not sorted: {} before {}",
                preset.id,
                pair[0].label(),
                pair[1].label()
            );
        }
        for option in &report.recommendations {
            assert!(option.delta_v_m_s.is_finite() && option.delta_v_m_s >= 0.0);
            assert!((0.0..=1.0).contains(&option.success_probability));
            assert_relative_eq!(
                option.effectiveness_score,
                option.delta_v_m_s * option.success_probability
            );
        }
    }
}

#[test]
fn test_strategy_counts() {
    let report =
        evaluate_mitigations(&common::reference("ref"), &MitigationConstants::default()).unwrap();
    let count = |strategy| {
        report
            .recommendations
            .iter()
            .filter(|option| option.strategy() == strategy)
            .count()
    };
    assert_eq!(count(Strategy::KineticImpactor), 4);
    assert_eq!(count(Strategy::GravityTractor), 4);
    assert_eq!(count(Strategy::NuclearDeflection), 1);
}

#[test]
fn test_large_body_puts_nuclear_first() {
    // Chicxulub-class: kinetic and tractor delta-v collapse, nuclear is fixed
    let report = evaluate_mitigations(
        &common::scenario("big", 10_000.0, 3000.0, 20.0),
        &MitigationConstants::default(),
    )
    .unwrap();
    assert_eq!(
        report.top_ranked().unwrap().strategy(),
        Strategy::NuclearDeflection
    );
    // The summary pick is still the last sweep entry
    assert_eq!(report.best_kinetic().unwrap().label(), "Kinetic Impactor (10000 kg)");
}

#[test]
fn test_rerun_is_bit_identical() {
    let scenario = common::scenario("apophis", 340.0, 3200.0, 12.6);
    let constants = MitigationConstants::default();
    let first = evaluate_mitigations(&scenario, &constants).unwrap();
    let second = evaluate_mitigations(&scenario, &constants).unwrap();

    let first_json = serde_json::to_string(&first.recommendations).unwrap();
    let second_json = serde_json::to_string(&second.recommendations).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_zero_velocity_fails() {
    assert!(
        evaluate_mitigations(
            &common::scenario("v", 100.0, 3000.0, 0.0),
            &MitigationConstants::default()
        )
        .is_err()
    );
}
