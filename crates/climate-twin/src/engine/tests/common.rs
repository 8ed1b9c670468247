use crate::engine::domain::{
    BridgeGeometry, BuildingGeometry, ClimateEvent, CoolingSystem, FloodEvent, FoundationType,
    HeatwaveEvent, InfrastructureAsset, Material, RoadGeometry, SeverityLabel,
};
use crate::engine::presets::climate_presets;
use crate::engine::reinforcement::Reinforcement;
use crate::engine::scenario::Scenario;

pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// 40-year steel bridge over a tidal river.
pub(super) fn coastal_bridge() -> InfrastructureAsset {
    InfrastructureAsset::bridge(
        Material::Steel,
        40.0,
        BridgeGeometry {
            span_length: 150.0,
            height_above_water: 12.0,
            load_capacity: 80.0,
            foundation_type: FoundationType::Pile,
        },
    )
    .expect("valid bridge")
    .with_id("BR-150")
    .with_location("Harbour crossing")
}

pub(super) fn high_flood() -> ClimateEvent {
    ClimateEvent::Flood(FloodEvent {
        rainfall_intensity: 100.0,
        water_level: 4.0,
        duration_hours: 18.0,
        severity: Some(SeverityLabel::High),
        flow_velocity: None,
    })
}

/// 60-year naturally ventilated concrete tower.
pub(super) fn concrete_tower() -> InfrastructureAsset {
    InfrastructureAsset::building(
        Material::Concrete,
        60.0,
        BuildingGeometry {
            floors: 15,
            height: 45.0,
            floor_area: 3000.0,
            cooling_system: CoolingSystem::Natural,
            ..BuildingGeometry::default()
        },
    )
    .expect("valid building")
}

pub(super) fn record_heatwave() -> ClimateEvent {
    ClimateEvent::Heatwave(HeatwaveEvent {
        max_temperature: 48.0,
        min_temperature: 35.0,
        duration_days: 12.0,
        humidity: 30.0,
        severity: None,
    })
}

/// 50-year steel bridge used for the retrofit comparison.
pub(super) fn ageing_bridge() -> InfrastructureAsset {
    InfrastructureAsset::bridge(
        Material::Steel,
        50.0,
        BridgeGeometry {
            span_length: 150.0,
            height_above_water: 15.0,
            load_capacity: 80.0,
            foundation_type: FoundationType::Pile,
        },
    )
    .expect("valid bridge")
}

pub(super) fn deep_flood() -> ClimateEvent {
    ClimateEvent::Flood(FloodEvent {
        rainfall_intensity: 100.0,
        water_level: 6.0,
        duration_hours: 18.0,
        severity: Some(SeverityLabel::High),
        flow_velocity: None,
    })
}

pub(super) fn retrofit_pair() -> (Scenario, Scenario) {
    let baseline = Scenario::new("Current bridge", ageing_bridge(), deep_flood());
    let modified = Scenario::new("Retrofitted bridge", ageing_bridge(), deep_flood())
        .with_reinforcements(&[
            Reinforcement::FoundationStrengthening,
            Reinforcement::DeckRehabilitation,
        ]);
    (baseline, modified)
}

/// One asset of every type and material age band, for sweeping properties.
pub(super) fn asset_sweep() -> Vec<InfrastructureAsset> {
    let mut assets = Vec::new();
    for material in Material::ordered() {
        for age in [0.0, 15.0, 45.0, 90.0] {
            assets.push(
                InfrastructureAsset::bridge(material, age, BridgeGeometry::default())
                    .expect("bridge"),
            );
            assets.push(
                InfrastructureAsset::building(
                    material,
                    age,
                    BuildingGeometry {
                        has_basement: true,
                        cooling_system: CoolingSystem::Unconditioned,
                        ..BuildingGeometry::default()
                    },
                )
                .expect("building"),
            );
            assets.push(
                InfrastructureAsset::road(material, age, RoadGeometry::default()).expect("road"),
            );
        }
    }
    assets
}

pub(super) fn event_sweep() -> Vec<ClimateEvent> {
    let mut events: Vec<ClimateEvent> = climate_presets()
        .into_iter()
        .map(|preset| preset.event)
        .collect();
    events.push(high_flood());
    events.push(record_heatwave());
    events
}
