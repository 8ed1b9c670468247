use super::common::*;
use crate::engine::classification::RiskLevel;
use crate::engine::degradation::baseline_integrity;
use crate::engine::domain::{AssetType, BridgeGeometry, EventType, InfrastructureAsset, Material};
use crate::engine::failure::failure_probability;
use crate::engine::recommendations::recommend;
use crate::engine::StressEngine;

#[test]
fn integrity_stays_in_bounds_and_decays_until_the_floor() {
    let mut previous = baseline_integrity(0.0);
    assert_close(previous, 1.0, 1e-12);

    for step in 1..=200 {
        let age = step as f64 * 0.5;
        let integrity = baseline_integrity(age);
        assert!((0.3..=1.0).contains(&integrity), "age {age}: {integrity}");
        if previous > 0.3 {
            assert!(integrity < previous, "integrity not decreasing at {age}");
        } else {
            assert_close(integrity, 0.3, 1e-12);
        }
        previous = integrity;
    }
}

#[test]
fn every_asset_event_pair_scores_within_bounds_and_matching_tier() {
    let engine = StressEngine::new();
    for asset in asset_sweep() {
        for event in event_sweep() {
            let result = engine.analyze(&asset, &event).expect("analysis succeeds");
            assert!(
                (0.0..=100.0).contains(&result.stress_score),
                "stress {} out of range",
                result.stress_score
            );
            assert!((0.0..=100.0).contains(&result.failure_probability));
            assert_eq!(result.risk_level, RiskLevel::from_score(result.stress_score));
            assert!(!result.recommendations.is_empty());
        }
    }
}

#[test]
fn failure_probability_never_drops_as_stress_rises() {
    for material in Material::ordered() {
        let properties = material.properties();
        for age in [0.0, 25.0, 80.0] {
            let integrity = baseline_integrity(age);
            let mut previous = 0.0;
            for step in 0..=1000 {
                let stress = step as f64 / 10.0;
                let probability = failure_probability(stress, integrity, 1.0, &properties);
                assert!(
                    probability >= previous,
                    "{} at age {age}: {probability} < {previous} at stress {stress}",
                    material.key()
                );
                previous = probability;
            }
        }
    }
}

#[test]
fn recommendations_exist_and_are_priority_sorted_for_every_combination() {
    for asset_type in AssetType::ordered() {
        for event_type in EventType::ordered() {
            for risk_level in RiskLevel::ordered() {
                let recommendations = recommend(asset_type, event_type, risk_level);
                assert!(
                    !recommendations.is_empty(),
                    "no recommendations for {} / {} / {}",
                    asset_type.key(),
                    event_type.key(),
                    risk_level.key()
                );
                assert!(recommendations
                    .windows(2)
                    .all(|pair| pair[0].priority <= pair[1].priority));
            }
        }
    }
}

#[test]
fn identical_inputs_produce_identical_results() {
    let engine = StressEngine::new();
    let first = engine
        .analyze(&coastal_bridge(), &high_flood())
        .expect("analysis succeeds");
    let second = engine
        .analyze(&coastal_bridge(), &high_flood())
        .expect("analysis succeeds");
    assert_eq!(first, second);
}

#[test]
fn bridge_heat_stress_follows_deck_expansion_coefficient() {
    let engine = StressEngine::new();
    let stress = |material: Material| {
        let bridge = InfrastructureAsset::bridge(material, 40.0, BridgeGeometry::default())
            .expect("valid bridge");
        engine
            .analyze(&bridge, &record_heatwave())
            .expect("analysis succeeds")
            .stress_score
    };

    let steel = stress(Material::Steel);
    let wood = stress(Material::Wood);
    let composite = stress(Material::Composite);
    assert!(steel > wood, "steel {steel} vs wood {wood}");
    assert!(wood > composite, "wood {wood} vs composite {composite}");
}
