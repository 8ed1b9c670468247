use crate::engine::domain::{
    BridgeGeometry, BuildingGeometry, HeatwaveEvent, Material, MaterialProperties, RoadGeometry,
};

const TEMPERATURE_WEIGHT: f64 = 0.4;
const RANGE_WEIGHT: f64 = 0.3;
const DURATION_WEIGHT: f64 = 0.3;

/// Expansion coefficient (per °C) treated as fully heat-sensitive.
pub const THERMAL_EXPANSION_REFERENCE: f64 = 1.5e-5;

/// Bridges start loading their expansion joints above this temperature.
const JOINT_DESIGN_TEMPERATURE_C: f64 = 30.0;
const JOINT_TEMPERATURE_SPAN_C: f64 = 30.0;
const JOINT_VULNERABILITY_CAP: f64 = 0.4;
/// Deck length at which joint movement reaches its nominal share.
const REFERENCE_SPAN_M: f64 = 100.0;
const SPAN_FACTOR_MIN: f64 = 0.5;
const SPAN_FACTOR_MAX: f64 = 1.25;

pub(crate) fn severity(event: &HeatwaveEvent) -> f64 {
    let intensity = temperature_factor(event.max_temperature) * TEMPERATURE_WEIGHT
        + range_factor(event.diurnal_range()) * RANGE_WEIGHT
        + duration_factor(event.duration_days) * DURATION_WEIGHT;
    (intensity * humidity_factor(event.humidity) * event.severity_multiplier()).clamp(0.0, 1.0)
}

pub(crate) fn building_vulnerability(
    building: &BuildingGeometry,
    event: &HeatwaveEvent,
    properties: &MaterialProperties,
) -> f64 {
    let temperature = match event.max_temperature {
        t if t < 35.0 => 0.1,
        t if t < 40.0 => 0.3 + (t - 35.0) / 10.0,
        t => (0.8 + (t - 40.0) / 20.0).min(1.0),
    };
    let persistence = (0.5 + event.duration_days / 20.0).min(1.0);
    let expansion = (properties.thermal_expansion_per_c / THERMAL_EXPANSION_REFERENCE).min(1.0);

    (temperature * persistence * building.cooling_system.heat_exposure() * expansion)
        .clamp(0.0, 1.0)
}

pub(crate) fn road_vulnerability(
    road: &RoadGeometry,
    event: &HeatwaveEvent,
    material: Material,
) -> f64 {
    // Rigid pavements do not rut the way asphalt does.
    let pavement = match material {
        Material::Concrete | Material::ReinforcedConcrete => 0.5,
        _ => 1.0,
    };
    let temperature = match event.max_temperature {
        t if t < 35.0 => 0.1,
        t if t < 45.0 => 0.4 + (t - 35.0) / 25.0,
        t => (0.8 + (t - 45.0) / 30.0).min(1.0),
    };
    let persistence = (0.3 + event.duration_days / 15.0).min(1.0);
    let traffic = if road.traffic_volume > 50_000.0 {
        1.2
    } else if road.traffic_volume > 20_000.0 {
        1.0
    } else {
        0.8
    };

    (pavement * temperature * persistence * traffic).clamp(0.0, 1.0)
}

/// Joint loading from heat above the design point, scaled down for
/// low-expansion decks and short spans.
pub(crate) fn bridge_vulnerability(
    bridge: &BridgeGeometry,
    event: &HeatwaveEvent,
    properties: &MaterialProperties,
) -> f64 {
    let excess = ((event.max_temperature - JOINT_DESIGN_TEMPERATURE_C) / JOINT_TEMPERATURE_SPAN_C)
        .clamp(0.0, 1.0);
    let expansion = (properties.thermal_expansion_per_c / THERMAL_EXPANSION_REFERENCE).min(1.0);
    let span = (bridge.span_length / REFERENCE_SPAN_M).clamp(SPAN_FACTOR_MIN, SPAN_FACTOR_MAX);

    (excess * JOINT_VULNERABILITY_CAP * expansion * span).clamp(0.0, 1.0)
}

fn temperature_factor(celsius: f64) -> f64 {
    match celsius {
        t if t < 35.0 => 0.2,
        t if t < 38.0 => 0.4 + (t - 35.0) / 10.0,
        t if t < 42.0 => 0.7 + (t - 38.0) / 15.0,
        t => (0.9 + (t - 42.0) / 20.0).min(1.0),
    }
}

fn range_factor(range: f64) -> f64 {
    match range {
        r if r < 10.0 => 0.3,
        r if r < 20.0 => 0.5 + (r - 10.0) / 30.0,
        r => (0.75 + (r - 20.0) / 40.0).min(1.0),
    }
}

fn duration_factor(days: f64) -> f64 {
    match days {
        d if d < 3.0 => 0.6,
        d if d < 7.0 => 0.75 + (d - 3.0) / 20.0,
        d => (0.9 + (d - 7.0) / 30.0).min(1.0),
    }
}

/// Dry heat is less punishing than humid heat.
fn humidity_factor(percent: f64) -> f64 {
    match percent {
        h if h < 40.0 => 0.8,
        h if h < 70.0 => 0.9 + (h - 40.0) / 300.0,
        h => 1.0 + (h - 70.0) / 100.0,
    }
}
