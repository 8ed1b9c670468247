use climate_twin::engine::domain::{EventType, InfrastructureAsset};
use climate_twin::engine::{
    preset_event, ClimateEvent, EngineError, PortfolioImporter, RiskLevel, StressEngine,
};
use serde_json::json;

fn bridge_record() -> serde_json::Value {
    json!({
        "type": "bridge",
        "material": "steel",
        "age": 40,
        "span_length": 150,
        "height_above_water": 12,
        "load_capacity": 80,
        "foundation_type": "pile",
        "coastal": true
    })
}

#[test]
fn loosely_typed_records_analyze_end_to_end() {
    let asset = InfrastructureAsset::from_value(bridge_record()).expect("asset parses");
    let event = ClimateEvent::from_value(json!({
        "event_type": "flood",
        "rainfall_intensity": 100,
        "water_level": 4,
        "duration": 18,
        "severity": "high",
        "wind_speed": 12
    }))
    .expect("event parses");

    let result = StressEngine::new()
        .analyze(&asset, &event)
        .expect("analysis succeeds");
    assert_eq!(result.risk_level, RiskLevel::High);

    let body = serde_json::to_value(&result).expect("result serializes");
    assert_eq!(body["asset_type"], "bridge");
    assert_eq!(body["event_type"], "flood");
    assert_eq!(body["risk_level"], "high");
    assert!(body["component_breakdown"]["age_amplifier"].is_number());
    let first = &body["recommendations"][0];
    assert!(first["priority"].is_string());
    assert!(first["cost_tier"]
        .as_str()
        .expect("cost tier string")
        .starts_with('$'));
}

#[test]
fn unknown_tags_surface_as_unsupported() {
    let mut record = bridge_record();
    record["type"] = json!("tunnel");
    match InfrastructureAsset::from_value(record) {
        Err(EngineError::UnsupportedAssetType(tag)) => assert_eq!(tag, "tunnel"),
        other => panic!("expected unsupported asset type, got {other:?}"),
    }

    match ClimateEvent::from_value(json!({ "event_type": "earthquake" })) {
        Err(EngineError::UnsupportedEventType(tag)) => assert_eq!(tag, "earthquake"),
        other => panic!("expected unsupported event type, got {other:?}"),
    }
}

#[test]
fn out_of_domain_values_are_invalid() {
    let mut record = bridge_record();
    record["age"] = json!(-3);
    match InfrastructureAsset::from_value(record) {
        Err(EngineError::InvalidAsset(_)) => {}
        other => panic!("expected invalid asset, got {other:?}"),
    }

    match ClimateEvent::from_value(json!({ "event_type": "flood", "water_level": 2 })) {
        Err(EngineError::InvalidEvent(message)) => {
            assert!(message.contains("rainfall_intensity"))
        }
        other => panic!("expected invalid event, got {other:?}"),
    }
}

#[test]
fn sample_register_screens_against_a_preset() {
    let data = include_bytes!("../sample_portfolio.csv");
    let register =
        PortfolioImporter::from_reader(&data[..], 100).expect("sample register imports");
    assert_eq!(register.assets.len(), 9);
    assert_eq!(register.rejected.len(), 1);
    assert_eq!(register.rejected[0].line, 11);

    let event = preset_event("hurricane_winds").expect("preset resolves");
    assert_eq!(event.event_type(), EventType::HighWind);
    let screening = StressEngine::new()
        .screen_portfolio(register, &event)
        .expect("screening succeeds");

    assert_eq!(screening.screened, 9);
    let top = &screening.results[0].assessment;
    assert!(screening
        .results
        .iter()
        .all(|entry| entry.assessment.stress_score <= top.stress_score));
    let tiers: usize = RiskLevel::ordered()
        .into_iter()
        .map(|level| screening.count(level))
        .sum();
    assert_eq!(tiers, 9);
}
